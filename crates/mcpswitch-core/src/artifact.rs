//! Read and write access to the external `mcp.json` artifact.
//!
//! The artifact belongs to a third-party tool. Only the `mcpServers` section
//! is ours; every other top-level key is carried through untouched.

use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;

use crate::domain::DomainError;

/// Top-level key holding the server map.
pub const SERVERS_KEY: &str = "mcpServers";

/// Handle to the artifact file on disk.
#[derive(Debug, Clone)]
pub struct McpArtifact {
    path: PathBuf,
}

impl McpArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> bool {
        fs::try_exists(&self.path).await.unwrap_or(false)
    }

    /// Read the top-level object.
    ///
    /// A missing file reads as `{"mcpServers": {}}`.
    pub async fn read_root(&self) -> Result<Map<String, Value>, DomainError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let mut root = Map::new();
                root.insert(SERVERS_KEY.to_string(), Value::Object(Map::new()));
                return Ok(root);
            }
            Err(e) => {
                return Err(DomainError::OperationFailed(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        match serde_json::from_str::<Value>(&text)? {
            Value::Object(root) => Ok(root),
            _ => Err(DomainError::InvalidConfiguration(
                "Invalid JSON structure".to_string(),
            )),
        }
    }

    /// Replace the file with `root`, pretty-printed.
    ///
    /// Writes a sibling `.tmp` file and renames it over the artifact. Missing
    /// parent directories are created.
    pub async fn write_root(&self, root: &Map<String, Value>) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut text = serde_json::to_string_pretty(root)?;
        text.push('\n');

        let temp_path = self.temp_path();
        fs::write(&temp_path, text).await?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), "Wrote MCP artifact");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_else(|| "mcp.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
