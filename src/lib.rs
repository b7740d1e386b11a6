//! qib-bootstrap - vendors the single-header dependencies of QInstallerBridge
//!
//! Downloads the headers and licenses of QInstallerBridge, QArchive and
//! QEasyDownloader from GitHub into local directories.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Package descriptors and the install algorithm
//! - [`infra`] - Infrastructure layer (network, filesystem)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
