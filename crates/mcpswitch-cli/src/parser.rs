//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for managing MCP server profiles.
///
/// Global options override the locations resolved from the environment.
#[derive(Parser)]
#[command(name = "mcpswitch")]
#[command(about = "Manage MCP server profiles and keep mcp.json in sync")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the default location
    #[arg(long = "db", global = true, env = "MCPSWITCH_DB")]
    pub db: Option<PathBuf>,

    /// Use this mcp.json instead of the default location
    #[arg(long = "artifact", global = true)]
    pub artifact: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
