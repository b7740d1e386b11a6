//! Core business logic
//!
//! The bundled package descriptors and the install algorithm. Side effects
//! go through [`crate::infra`].

pub mod install;
pub mod package;
