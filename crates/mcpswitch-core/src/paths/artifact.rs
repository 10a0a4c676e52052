//! Location of the external MCP configuration file.

use std::env;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::normalize_user_path;

/// Environment variable overriding the artifact path.
pub const ARTIFACT_ENV: &str = "MCPSWITCH_ARTIFACT";

/// Default artifact location: `~/.cursor/mcp.json`.
pub fn default_artifact_path() -> Result<PathBuf, PathError> {
    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(".cursor").join("mcp.json"))
}

/// Artifact path honoring `MCPSWITCH_ARTIFACT`.
pub fn artifact_path() -> Result<PathBuf, PathError> {
    match env::var(ARTIFACT_ENV) {
        Ok(raw) if !raw.trim().is_empty() => normalize_user_path(&raw),
        _ => default_artifact_path(),
    }
}
