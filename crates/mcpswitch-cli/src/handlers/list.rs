//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::server_display::{NAME_WIDTH, TARGET_WIDTH, TYPE_WIDTH};
use crate::presentation::{
    display_server_details, display_server_row, display_table_header, print_separator,
};

/// Execute the list command.
pub async fn execute(ctx: &CliContext, enabled_only: bool, detailed: bool) -> Result<()> {
    let servers = ctx.app().servers().list(!enabled_only).await?;

    if servers.is_empty() {
        if enabled_only {
            println!("No enabled servers.");
        } else {
            println!("No servers found. Use 'mcpswitch add' or 'mcpswitch import' to add some.");
        }
        return Ok(());
    }

    if detailed {
        for (i, server) in servers.iter().enumerate() {
            if i > 0 {
                println!();
            }
            display_server_details(server);
        }
    } else {
        display_table_header();
        print_separator(3 + NAME_WIDTH + TYPE_WIDTH + TARGET_WIDTH + 8 + 4);
        for server in &servers {
            display_server_row(server);
        }
    }

    let enabled = servers.iter().filter(|s| s.is_enabled()).count();
    println!();
    println!("{} server(s), {enabled} enabled", servers.len());
    Ok(())
}
