//! Server lifecycle: create, enable/disable, delete and lookups.
//!
//! Every mutation commits to the store first and then mirrors the change
//! into the artifact. The mirror step is best-effort: a failed sync is
//! logged and the committed mutation is still reported as a success.

use serde::Serialize;

use crate::domain::{DomainError, McpServer, ServerConfiguration};
use crate::ports::ServerRepository;

use super::store_handle::{StoreHandle, WriteGuard};
use super::sync_service::SyncService;

/// Input for [`ServerService::create`].
#[derive(Debug, Clone)]
pub struct CreateServerInput {
    pub name: String,
    pub configuration: ServerConfiguration,
    pub enabled: bool,
    pub description: Option<String>,
}

impl CreateServerInput {
    pub fn new(name: impl Into<String>, configuration: ServerConfiguration) -> Self {
        Self {
            name: name.into(),
            configuration,
            enabled: false,
            description: None,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Store totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ServerStatus {
    pub total: usize,
    pub enabled: usize,
    pub disabled: usize,
}

/// Orchestrates server mutations and lookups.
#[derive(Clone)]
pub struct ServerService {
    store: StoreHandle,
    sync: SyncService,
}

impl ServerService {
    pub const fn new(store: StoreHandle, sync: SyncService) -> Self {
        Self { store, sync }
    }

    /// Create and persist a server.
    ///
    /// Fails with `AlreadyExists` when a server with exactly the same
    /// (trimmed) name is already stored.
    pub async fn create(&self, input: CreateServerInput) -> Result<McpServer, DomainError> {
        input.configuration.validate()?;

        let guard = self.store.lock().await;
        let repo = self.store.repo();

        let name = input.name.trim();
        if find_exact(repo, name).await?.is_some() {
            return Err(DomainError::AlreadyExists(format!(
                "Server with name '{name}' already exists"
            )));
        }

        let server = McpServer::create(
            name,
            input.configuration,
            input.enabled,
            input.description,
        )?;
        repo.save(&server).await?;

        tracing::info!(
            server_id = %server.id(),
            server_name = %server.name(),
            enabled = server.is_enabled(),
            "Created server"
        );

        if server.is_enabled() {
            self.publish(&guard).await;
        }
        Ok(server)
    }

    /// Flip a server between enabled and disabled.
    pub async fn toggle(&self, id: &str) -> Result<McpServer, DomainError> {
        let guard = self.store.lock().await;
        let current = self.require(id).await?;
        self.apply(&guard, current.toggle()?).await
    }

    /// Set a server's enabled state.
    ///
    /// Asking for the state the server is already in returns it unchanged
    /// without writing anything.
    pub async fn set_enabled(&self, id: &str, enabled: bool) -> Result<McpServer, DomainError> {
        let guard = self.store.lock().await;
        let current = self.require(id).await?;
        if current.is_enabled() == enabled {
            tracing::debug!(server_id = %id, enabled, "Server already in requested state");
            return Ok(current);
        }
        self.apply(&guard, current.with_enabled(enabled)?).await
    }

    /// Remove a server. Deleting an enabled server also drops it from the
    /// artifact.
    pub async fn delete(&self, id: &str) -> Result<McpServer, DomainError> {
        let guard = self.store.lock().await;
        let server = self.require(id).await?;
        self.store.repo().delete(id).await?;

        tracing::info!(server_id = %id, server_name = %server.name(), "Deleted server");

        if server.is_enabled() {
            self.publish(&guard).await;
        }
        Ok(server)
    }

    /// All servers ordered by name, or only the enabled ones.
    pub async fn list(&self, include_disabled: bool) -> Result<Vec<McpServer>, DomainError> {
        let repo = self.store.repo();
        let servers = if include_disabled {
            repo.find_all().await?
        } else {
            repo.find_enabled().await?
        };
        Ok(servers)
    }

    pub async fn get(&self, id: &str) -> Result<Option<McpServer>, DomainError> {
        Ok(self.store.repo().find_by_id(id).await?)
    }

    /// Resolve a user-supplied identifier.
    ///
    /// Tried in order: exact name, id, then a substring of exactly one name.
    pub async fn resolve(&self, identifier: &str) -> Result<McpServer, DomainError> {
        let repo = self.store.repo();
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(DomainError::NotFound("No server identifier given".to_string()));
        }

        let mut candidates = repo.find_by_name(identifier).await?;
        if let Some(pos) = candidates.iter().position(|s| s.name() == identifier) {
            return Ok(candidates.swap_remove(pos));
        }

        if let Some(server) = repo.find_by_id(identifier).await? {
            return Ok(server);
        }

        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(DomainError::NotFound(format!(
                "Server '{identifier}' not found"
            ))),
            _ => {
                let names: Vec<&str> = candidates.iter().map(McpServer::name).collect();
                Err(DomainError::NotFound(format!(
                    "'{identifier}' is ambiguous; matches: {}",
                    names.join(", ")
                )))
            }
        }
    }

    pub async fn status(&self) -> Result<ServerStatus, DomainError> {
        let repo = self.store.repo();
        let total = repo.count().await?;
        let enabled = repo.enabled_count().await?;
        Ok(ServerStatus {
            total,
            enabled,
            disabled: total.saturating_sub(enabled),
        })
    }

    async fn require(&self, id: &str) -> Result<McpServer, DomainError> {
        self.store
            .repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Server with ID {id} not found")))
    }

    async fn apply(
        &self,
        guard: &WriteGuard<'_>,
        updated: McpServer,
    ) -> Result<McpServer, DomainError> {
        self.store.repo().save(&updated).await?;

        tracing::info!(
            server_id = %updated.id(),
            server_name = %updated.name(),
            enabled = updated.is_enabled(),
            "Updated server state"
        );

        self.publish(guard).await;
        Ok(updated)
    }

    /// Mirror the store into the artifact, logging instead of failing.
    async fn publish(&self, guard: &WriteGuard<'_>) {
        if let Err(e) = self.sync.sync_all_locked(guard).await {
            tracing::warn!(
                path = %self.sync.artifact().path().display(),
                error = %e,
                "Failed to sync MCP artifact"
            );
        }
    }
}

async fn find_exact(
    repo: &dyn ServerRepository,
    name: &str,
) -> Result<Option<McpServer>, DomainError> {
    Ok(repo
        .find_by_name(name)
        .await?
        .into_iter()
        .find(|s| s.name() == name))
}
