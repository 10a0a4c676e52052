//! Command-line adapter for `mcpswitch`.
//!
//! Parses arguments, wires the `SQLite` store into an `AppCore` and renders
//! results for a terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the unit test build
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;

// Used only by the binary target
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
