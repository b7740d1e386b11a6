//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod install;
pub mod list;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::urls::RAW_CONTENT_HOST;
use output::OutputConfig;

/// qib-bootstrap - vendor the QInstallerBridge header dependencies
///
/// Downloads QInstallerBridge, QArchive and QEasyDownloader from GitHub into
/// ./QInstallerBridge, replacing whatever is there.
#[derive(Parser, Debug)]
#[command(name = "qib-bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the install report as JSON
    #[arg(long)]
    pub json: bool,

    /// Install relative to this directory instead of the current one
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Install only these packages (repeatable, case-insensitive)
    #[arg(long, value_name = "REPO")]
    pub only: Vec<String>,

    /// List the bundled packages and exit
    #[arg(long)]
    pub list: bool,

    /// Raw-content host to fetch from
    #[arg(long, hide = true, default_value = RAW_CONTENT_HOST)]
    pub base_url: String,
}

impl Cli {
    /// Log level implied by -q / -v
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Execute the CLI
    pub async fn run(self) -> Result<()> {
        let output = OutputConfig::new(self.quiet, self.json, self.verbose);

        if self.list {
            return list::execute(&self.base_url, &output);
        }

        install::execute(&self.directory, &self.base_url, &self.only, &output).await
    }
}
