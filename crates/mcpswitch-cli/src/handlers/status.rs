//! Status command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the status command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let status = ctx.app().servers().status().await?;
    let artifact = ctx.app().sync().artifact();
    let present = if artifact.exists().await { "" } else { " (missing)" };

    println!("Servers:  {} total", status.total);
    println!("          {} enabled", status.enabled);
    println!("          {} disabled", status.disabled);
    println!();
    println!("Database: {}", ctx.config().database_path.display());
    println!("Artifact: {}{present}", artifact.path().display());
    Ok(())
}
