//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::handlers::sync;
use crate::utils::input;

/// Execute the remove command.
pub async fn execute(ctx: &CliContext, identifier: &str, force: bool) -> Result<()> {
    let server = ctx.app().servers().resolve(identifier).await?;

    if !force {
        let state = if server.is_enabled() { " (enabled)" } else { "" };
        println!("Server: {}{state}", server.name());
        println!("  ID:   {}", server.id());
        if !input::prompt_confirmation("Remove this server?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = ctx.app().servers().delete(server.id()).await?;
    println!("Removed server '{}'", removed.name());
    if removed.is_enabled() {
        let artifact = ctx.config().artifact_path.display();
        if sync::artifact_lists(ctx, removed.name()).await {
            println!("{artifact} still lists it; run 'mcpswitch sync'");
        } else {
            println!("Dropped from {artifact}");
        }
    }
    Ok(())
}
