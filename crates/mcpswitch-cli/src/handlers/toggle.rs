//! Enable, disable and toggle handlers.
//!
//! Every state change rewrites the artifact; a failed rewrite is logged and
//! does not fail the command.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Set a server to the given state.
pub async fn execute_set(ctx: &CliContext, identifier: &str, enabled: bool) -> Result<()> {
    let server = ctx.app().servers().resolve(identifier).await?;
    let verb = if enabled { "enabled" } else { "disabled" };

    if server.is_enabled() == enabled {
        println!("Server '{}' is already {verb}", server.name());
        return Ok(());
    }

    let updated = ctx.app().servers().set_enabled(server.id(), enabled).await?;
    println!("Server '{}' {verb}", updated.name());
    Ok(())
}

/// Flip a server's state.
pub async fn execute_toggle(ctx: &CliContext, identifier: &str) -> Result<()> {
    let server = ctx.app().servers().resolve(identifier).await?;
    let updated = ctx.app().servers().toggle(server.id()).await?;
    let verb = if updated.is_enabled() { "enabled" } else { "disabled" };
    println!("Server '{}' {verb}", updated.name());
    Ok(())
}
