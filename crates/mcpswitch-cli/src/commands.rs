//! Main commands enum.
//!
//! `<server>` arguments accept a name, an id, or a unique part of a name.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List stored servers
    List {
        /// Only show enabled servers
        #[arg(long)]
        enabled_only: bool,
        /// Show every field of each server
        #[arg(short, long)]
        detailed: bool,
    },

    /// Enable a server and sync mcp.json
    Enable {
        /// Server name or ID
        server: String,
    },

    /// Disable a server and sync mcp.json
    Disable {
        /// Server name or ID
        server: String,
    },

    /// Flip a server between enabled and disabled
    Toggle {
        /// Server name or ID
        server: String,
    },

    /// Add a new server
    Add {
        /// Unique server name
        name: String,
        /// Executable for a command-based server
        #[arg(long, conflicts_with = "url", required_unless_present = "url")]
        command: Option<String>,
        /// Comma-separated arguments for the command
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "url")]
        args: Vec<String>,
        /// Comma-separated KEY=VALUE environment variables
        #[arg(long, value_delimiter = ',', conflicts_with = "url")]
        env: Vec<String>,
        /// Endpoint for a URL-based server
        #[arg(long)]
        url: Option<String>,
        /// Comma-separated NAME=VALUE HTTP headers
        #[arg(long, value_delimiter = ',', conflicts_with = "command")]
        headers: Vec<String>,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Enable the server right away
        #[arg(long)]
        enable: bool,
    },

    /// Remove a server
    Remove {
        /// Server name or ID
        server: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print or write the enabled servers as mcp.json
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Include counts and export time
        #[arg(long)]
        with_metadata: bool,
    },

    /// Show server counts and file locations
    Status,

    /// Import servers from a JSON file
    Import {
        /// File to import (mcpServers, servers or bare map)
        #[arg(required_unless_present = "auto", conflicts_with = "auto")]
        file: Option<PathBuf>,
        /// Leave servers that already exist untouched
        #[arg(long)]
        skip_existing: bool,
        /// Enable every imported server
        #[arg(long)]
        enable_all: bool,
        /// Discover servers from the configured mcp.json
        #[arg(long)]
        auto: bool,
        /// Sync mcp.json after importing
        #[arg(long)]
        sync: bool,
    },

    /// Rewrite mcp.json from the enabled servers
    Sync,

    /// Poll the store and print changes until interrupted
    Watch {
        /// Poll interval in seconds
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Show resolved paths
    Paths,
}
