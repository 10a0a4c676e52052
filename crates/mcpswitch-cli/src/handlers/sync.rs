//! Sync command handler.

use anyhow::Result;
use mcpswitch_core::SyncResult;
use mcpswitch_core::artifact::SERVERS_KEY;

use crate::bootstrap::CliContext;

/// Execute the sync command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let result = ctx.app().sync().sync_all().await?;
    print_result(ctx, &result);
    Ok(())
}

/// Print a sync summary.
pub fn print_result(ctx: &CliContext, result: &SyncResult) {
    println!(
        "Synced {} server(s) to {}",
        result.added,
        ctx.app().sync().artifact().path().display()
    );
    if let Some(line) = removed_line(result.removed) {
        println!("{line}");
    }
    for err in &result.errors {
        eprintln!("  warning: {err}");
    }
}

fn removed_line(removed: usize) -> Option<String> {
    match removed {
        0 => None,
        1 => Some("Removed 1 stale entry".to_string()),
        n => Some(format!("Removed {n} stale entries")),
    }
}

/// Whether the artifact currently has an entry for `name`.
///
/// Lifecycle syncs are best-effort, so handlers check the file rather than
/// assume the write happened. An unreadable artifact counts as not listed.
pub async fn artifact_lists(ctx: &CliContext, name: &str) -> bool {
    ctx.app()
        .sync()
        .artifact()
        .read_root()
        .await
        .is_ok_and(|root| root.get(SERVERS_KEY).and_then(|s| s.get(name)).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_line_pluralizes() {
        assert_eq!(removed_line(0), None);
        assert_eq!(removed_line(1).as_deref(), Some("Removed 1 stale entry"));
        assert_eq!(removed_line(3).as_deref(), Some("Removed 3 stale entries"));
    }
}
