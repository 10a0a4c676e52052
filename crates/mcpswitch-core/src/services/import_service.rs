//! Importing servers from an `mcp.json`-style document.
//!
//! Three document shapes are accepted, tried in this order:
//!
//! 1. `{"servers": {"<name>": {..}}}`
//! 2. `{"mcpServers": {"<name>": {..}}}`
//! 3. `{"<name>": {..}}`
//!
//! A wrapper shape only matches when its value is an object of objects.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde_json::{Map, Value};

use crate::artifact::SERVERS_KEY;
use crate::domain::{DomainError, McpServer, ServerConfiguration};
use crate::ports::ServerRepository;

use super::store_handle::{StoreHandle, WriteGuard};

/// Per-run import counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    /// One message per entry that could not be imported.
    pub errors: Vec<String>,
}

impl ImportResult {
    /// Entries that reached the store.
    pub const fn imported(&self) -> usize {
        self.added + self.updated
    }
}

/// Parses import documents and merges them into the store.
#[derive(Clone)]
pub struct ImportService {
    store: StoreHandle,
}

impl ImportService {
    pub const fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Extract `name -> raw config` from a JSON document.
    pub fn parse(raw: &str) -> Result<BTreeMap<String, Value>, DomainError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidConfiguration(format!("Invalid JSON: {e}")))?;
        let Value::Object(root) = value else {
            return Err(DomainError::InvalidConfiguration(
                "Import document must be a JSON object".to_string(),
            ));
        };

        for key in ["servers", SERVERS_KEY] {
            if let Some(entries) = wrapped_servers(&root, key) {
                return Ok(entries
                    .iter()
                    .map(|(name, config)| (name.clone(), config.clone()))
                    .collect());
            }
        }

        root.into_iter()
            .map(|(name, config)| {
                if config.is_object() {
                    Ok((name, config))
                } else {
                    Err(DomainError::InvalidConfiguration(format!(
                        "Invalid configuration for '{name}': expected an object"
                    )))
                }
            })
            .collect()
    }

    /// Merge parsed entries into the store, in name order.
    ///
    /// Per-entry failures are collected in [`ImportResult::errors`] and do not
    /// stop the run. Only a failing lookup aborts the merge.
    pub async fn merge(
        &self,
        parsed: &BTreeMap<String, Value>,
        skip_existing: bool,
        enable_all: bool,
    ) -> Result<ImportResult, DomainError> {
        let guard = self.store.lock().await;
        self.merge_locked(&guard, parsed, skip_existing, enable_all)
            .await
    }

    /// Read, parse and merge a file.
    pub async fn import_file(
        &self,
        path: &Path,
        skip_existing: bool,
        enable_all: bool,
    ) -> Result<ImportResult, DomainError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DomainError::NotFound(format!("File not found: {}", path.display()))
            } else {
                DomainError::OperationFailed(format!("Failed to read {}: {e}", path.display()))
            }
        })?;

        let parsed = Self::parse(&raw)?;
        let result = self.merge(&parsed, skip_existing, enable_all).await?;

        tracing::info!(
            path = %path.display(),
            added = result.added,
            updated = result.updated,
            skipped = result.skipped,
            errors = result.errors.len(),
            "Imported servers"
        );
        Ok(result)
    }

    /// Discover servers from an existing artifact without touching known
    /// names or enabling anything. A missing file is not an error.
    pub async fn auto_import(&self, path: &Path) -> Result<ImportResult, DomainError> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            tracing::debug!(path = %path.display(), "No file to auto-import");
            return Ok(ImportResult::default());
        }
        self.import_file(path, true, false).await
    }

    async fn merge_locked(
        &self,
        _guard: &WriteGuard<'_>,
        parsed: &BTreeMap<String, Value>,
        skip_existing: bool,
        enable_all: bool,
    ) -> Result<ImportResult, DomainError> {
        let repo = self.store.repo();
        let mut result = ImportResult::default();

        for (name, raw) in parsed {
            let configuration = match ServerConfiguration::from_value(raw) {
                Ok(configuration) => configuration,
                Err(e) => {
                    result.errors.push(import_error(name, &e));
                    continue;
                }
            };

            let trimmed = name.trim();
            let existing = repo
                .find_by_name(trimmed)
                .await?
                .into_iter()
                .find(|s| s.name() == trimmed);

            match existing {
                Some(_) if skip_existing => result.skipped += 1,
                Some(server) => {
                    let replaced = server
                        .with_configuration(configuration)
                        .and_then(|s| if enable_all { s.with_enabled(true) } else { Ok(s) });
                    match save(repo, replaced).await {
                        Ok(()) => result.updated += 1,
                        Err(e) => result.errors.push(import_error(name, &e)),
                    }
                }
                None => {
                    let created = McpServer::create(name.as_str(), configuration, enable_all, None);
                    match save(repo, created).await {
                        Ok(()) => result.added += 1,
                        Err(e) => result.errors.push(import_error(name, &e)),
                    }
                }
            }
        }

        Ok(result)
    }
}

fn wrapped_servers<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    root.get(key)
        .and_then(Value::as_object)
        .filter(|entries| entries.values().all(Value::is_object))
}

async fn save(
    repo: &dyn ServerRepository,
    server: Result<McpServer, DomainError>,
) -> Result<(), DomainError> {
    let server = server?;
    repo.save(&server).await?;
    tracing::debug!(server_id = %server.id(), server_name = %server.name(), "Imported server");
    Ok(())
}

fn import_error(name: &str, err: &DomainError) -> String {
    format!("Failed to import '{name}': {err}")
}
