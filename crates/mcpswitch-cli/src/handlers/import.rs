//! Import command handler.

use std::path::Path;

use anyhow::Result;
use mcpswitch_core::ImportResult;

use crate::bootstrap::CliContext;
use crate::handlers::sync;

/// Options for the import command.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportOptions {
    pub skip_existing: bool,
    pub enable_all: bool,
    pub sync_after: bool,
}

/// Import from an explicit file.
pub async fn execute(ctx: &CliContext, file: &Path, options: ImportOptions) -> Result<()> {
    let result = ctx
        .app()
        .import()
        .import_file(file, options.skip_existing, options.enable_all)
        .await?;

    println!("Imported from {}", file.display());
    finish(ctx, &result, options.sync_after).await
}

/// Discover servers from the configured artifact.
pub async fn execute_auto(ctx: &CliContext, sync_after: bool) -> Result<()> {
    let path = &ctx.config().auto_import_path;
    let result = ctx.app().import().auto_import(path).await?;

    println!("Auto-imported from {}", path.display());
    finish(ctx, &result, sync_after).await
}

async fn finish(ctx: &CliContext, result: &ImportResult, sync_after: bool) -> Result<()> {
    print_result(result);
    if sync_after {
        let synced = ctx.app().sync().sync_all().await?;
        sync::print_result(ctx, &synced);
    }
    Ok(())
}

fn print_result(result: &ImportResult) {
    println!("  added:   {}", result.added);
    println!("  updated: {}", result.updated);
    println!("  skipped: {}", result.skipped);
    if !result.errors.is_empty() {
        println!("  errors:  {}", result.errors.len());
        for err in &result.errors {
            eprintln!("    {err}");
        }
    }
}
