//! Rendering of server records for the terminal.

use mcpswitch_core::{McpServer, ServerConfiguration};

use super::tables::{format_optional, truncate_string};

/// Column widths for the list table.
pub const NAME_WIDTH: usize = 24;
pub const TYPE_WIDTH: usize = 8;
pub const TARGET_WIDTH: usize = 44;

/// One-line summary of where a server points: the command line or the URL.
pub fn describe_target(config: &ServerConfiguration) -> String {
    match config {
        ServerConfiguration::Command { command, args, .. } => {
            if args.is_empty() {
                command.clone()
            } else {
                format!("{command} {}", args.join(" "))
            }
        }
        ServerConfiguration::Url { url, .. } => url.clone(),
    }
}

/// Header matching [`display_server_row`].
pub fn display_table_header() {
    println!(
        "{:<3} {:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:<TARGET_WIDTH$} {:<8}",
        "", "NAME", "TYPE", "TARGET", "ID"
    );
}

/// Print one table row.
pub fn display_server_row(server: &McpServer) {
    let marker = if server.is_enabled() { "[x]" } else { "[ ]" };
    let short_id: String = server.id().chars().take(8).collect();
    println!(
        "{:<3} {:<NAME_WIDTH$} {:<TYPE_WIDTH$} {:<TARGET_WIDTH$} {:<8}",
        marker,
        truncate_string(server.name(), NAME_WIDTH),
        server.configuration().type_name(),
        truncate_string(&describe_target(server.configuration()), TARGET_WIDTH),
        short_id,
    );
}

/// Print every field of a server as an indented block.
pub fn display_server_details(server: &McpServer) {
    let state = if server.is_enabled() { "enabled" } else { "disabled" };
    println!("{} ({state})", server.name());
    println!("  ID:          {}", server.id());
    println!("  Type:        {}", server.configuration().type_name());
    match server.configuration() {
        ServerConfiguration::Command { command, args, env } => {
            println!("  Command:     {command}");
            if !args.is_empty() {
                println!("  Args:        {}", args.join(" "));
            }
            for (key, value) in env {
                println!("  Env:         {key}={value}");
            }
        }
        ServerConfiguration::Url { url, headers } => {
            println!("  URL:         {url}");
            for name in headers.keys() {
                println!("  Header:      {name}: <set>");
            }
        }
    }
    println!(
        "  Description: {}",
        format_optional(server.description(), "-")
    );
    println!(
        "  Created:     {}",
        server.created_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Modified:    {}",
        server.modified_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
