//! Reconciliation of the artifact's `mcpServers` section with the store.

use serde_json::{Map, Value};

use crate::artifact::{McpArtifact, SERVERS_KEY};
use crate::domain::{ConfigurationExporter, DomainError, McpServer};
use crate::ports::ServerRepository;

use super::store_handle::{StoreHandle, WriteGuard};

/// Outcome of a sync pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Entries written.
    pub added: usize,
    /// Entries dropped. For a full sync this is the shrink in map size, not
    /// the number of names that disappeared.
    pub removed: usize,
    pub errors: Vec<String>,
}

/// Projects enabled servers into the artifact.
#[derive(Clone)]
pub struct SyncService {
    store: StoreHandle,
    artifact: McpArtifact,
}

impl SyncService {
    pub const fn new(store: StoreHandle, artifact: McpArtifact) -> Self {
        Self { store, artifact }
    }

    pub const fn artifact(&self) -> &McpArtifact {
        &self.artifact
    }

    /// Rewrite `mcpServers` from every enabled server in the store.
    pub async fn sync_all(&self) -> Result<SyncResult, DomainError> {
        let guard = self.store.lock().await;
        self.sync_all_locked(&guard).await
    }

    /// Add or remove a single server's entry according to its state.
    pub async fn sync_one(&self, server: &McpServer) -> Result<SyncResult, DomainError> {
        let guard = self.store.lock().await;
        self.sync_one_locked(&guard, server).await
    }

    pub(crate) async fn sync_all_locked(
        &self,
        _guard: &WriteGuard<'_>,
    ) -> Result<SyncResult, DomainError> {
        let servers = self.store.repo().find_all().await?;
        let mut root = self.artifact.read_root().await?;

        let previous = root
            .get(SERVERS_KEY)
            .and_then(Value::as_object)
            .map_or(0, Map::len);
        let exported = ConfigurationExporter::export_enabled(&servers);
        let added = exported.len();

        root.insert(SERVERS_KEY.to_string(), Value::Object(exported));
        self.artifact.write_root(&root).await?;

        tracing::info!(
            path = %self.artifact.path().display(),
            servers = added,
            "Synced MCP artifact"
        );

        Ok(SyncResult {
            added,
            removed: previous.saturating_sub(added),
            errors: Vec::new(),
        })
    }

    pub(crate) async fn sync_one_locked(
        &self,
        _guard: &WriteGuard<'_>,
        server: &McpServer,
    ) -> Result<SyncResult, DomainError> {
        let mut root = self.artifact.read_root().await?;

        if server.is_enabled() {
            let entries = root
                .entry(SERVERS_KEY)
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()
                .ok_or_else(|| {
                    DomainError::InvalidConfiguration(format!("'{SERVERS_KEY}' must be an object"))
                })?;
            entries.insert(server.name().to_string(), server.configuration().to_value());
            self.artifact.write_root(&root).await?;

            tracing::info!(server_name = %server.name(), "Added server to MCP artifact");
            return Ok(SyncResult {
                added: 1,
                ..SyncResult::default()
            });
        }

        let Some(entries) = root.get_mut(SERVERS_KEY).and_then(Value::as_object_mut) else {
            return Ok(SyncResult::default());
        };
        if entries.remove(server.name()).is_none() {
            return Ok(SyncResult::default());
        }
        self.artifact.write_root(&root).await?;

        tracing::info!(server_name = %server.name(), "Removed server from MCP artifact");
        Ok(SyncResult {
            removed: 1,
            ..SyncResult::default()
        })
    }
}
