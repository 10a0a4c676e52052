//! Platform path resolution.
//!
//! Environment lookups happen in the public functions; the `*_from` helpers
//! are pure so they can be tested without touching process state.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "MCPSWITCH_DATA_DIR";

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `MCPSWITCH_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/mcpswitch`)
pub fn data_root() -> Result<PathBuf, PathError> {
    data_root_from(env::var(DATA_DIR_ENV).ok().as_deref())
}

pub(super) fn data_root_from(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(raw) = override_dir.filter(|s| !s.trim().is_empty()) {
        return normalize_user_path(raw);
    }

    let data_dir = dirs::data_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join("mcpswitch"))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let root = data_root_from(Some("/tmp/mcpswitch-test")).unwrap();
        assert_eq!(root, PathBuf::from("/tmp/mcpswitch-test"));
    }

    #[test]
    fn test_blank_override_ignored() {
        if let Ok(root) = data_root_from(Some("  ")) {
            assert!(root.ends_with("mcpswitch"));
        }
    }

    #[test]
    fn test_normalize_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(normalize_user_path("~/x/y.json").unwrap(), home.join("x/y.json"));
        }
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(matches!(normalize_user_path("   "), Err(PathError::EmptyPath)));
    }

    #[test]
    fn test_relative_becomes_absolute() {
        assert!(normalize_user_path("rel/file.json").unwrap().is_absolute());
    }
}
