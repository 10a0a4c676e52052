//! Paths command handler.
//!
//! Works without opening the database.

use anyhow::Result;
use mcpswitch_core::AppConfig;

/// Execute the paths command.
pub fn execute(config: &AppConfig) -> Result<()> {
    println!("Database:    {}", config.database_path.display());
    println!("Artifact:    {}", config.artifact_path.display());
    println!("Auto-import: {}", config.auto_import_path.display());
    println!("Poll:        {}s", config.poll_interval.as_secs());
    Ok(())
}
