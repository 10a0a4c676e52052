//! Watch command handler.
//!
//! Polls the store and prints a line each time the catalogue changes,
//! until Ctrl-C.

use std::time::Duration;

use anyhow::{Context, Result};
use mcpswitch_core::ServerSnapshot;
use tokio_util::sync::CancellationToken;

use crate::bootstrap::CliContext;

/// Execute the watch command.
pub async fn execute(ctx: &CliContext, interval_secs: Option<u64>) -> Result<()> {
    let interval = interval_secs
        .map_or(ctx.config().poll_interval, |s| Duration::from_secs(s.max(1)));

    let cancel = CancellationToken::new();
    let (mut rx, handle) = ctx.app().monitor(interval, cancel.clone()).spawn();

    println!(
        "Watching {} every {}s (Ctrl-C to stop)",
        ctx.config().database_path.display(),
        interval.as_secs()
    );

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                print_snapshot(&rx.borrow_and_update());
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                break;
            }
        }
    }

    cancel.cancel();
    handle.await.context("Monitor task failed")?;
    Ok(())
}

fn print_snapshot(snapshot: &ServerSnapshot) {
    let enabled: Vec<&str> = snapshot
        .servers
        .iter()
        .filter(|s| s.is_enabled())
        .map(|s| s.name())
        .collect();

    println!(
        "[{}] {} server(s), {} enabled: {}",
        snapshot.taken_at.format("%H:%M:%S"),
        snapshot.total(),
        snapshot.enabled(),
        if enabled.is_empty() {
            "-".to_string()
        } else {
            enabled.join(", ")
        }
    );
}
