//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (the CLI today)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::artifact::McpArtifact;
use crate::ports::ServerRepository;

use super::{ExportService, ImportService, ServerService, StoreHandle, StoreMonitor, SyncService};

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repo = Arc::new(SqliteServerRepository::new(pool));
/// let core = AppCore::new(repo, McpArtifact::new(config.artifact_path));
///
/// let servers = core.servers().list(true).await?;
/// core.sync().sync_all().await?;
/// ```
pub struct AppCore {
    store: StoreHandle,
    servers: ServerService,
    sync: SyncService,
    import: ImportService,
    export: ExportService,
}

impl AppCore {
    /// Wire every service over one repository and one artifact.
    pub fn new(repo: Arc<dyn ServerRepository>, artifact: McpArtifact) -> Self {
        let store = StoreHandle::new(repo);
        let sync = SyncService::new(store.clone(), artifact);
        Self {
            servers: ServerService::new(store.clone(), sync.clone()),
            import: ImportService::new(store.clone()),
            export: ExportService::new(store.clone()),
            sync,
            store,
        }
    }

    /// Access the server lifecycle service.
    pub const fn servers(&self) -> &ServerService {
        &self.servers
    }

    /// Access the artifact sync service.
    pub const fn sync(&self) -> &SyncService {
        &self.sync
    }

    /// Access the import service.
    pub const fn import(&self) -> &ImportService {
        &self.import
    }

    /// Access the export service.
    pub const fn export(&self) -> &ExportService {
        &self.export
    }

    /// The shared store handle.
    pub const fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Build a monitor polling this core's store.
    pub fn monitor(&self, poll_interval: Duration, cancel_token: CancellationToken) -> StoreMonitor {
        StoreMonitor::new(self.store.clone(), poll_interval, cancel_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServerConfiguration;
    use crate::services::CreateServerInput;
    use crate::services::test_support::InMemoryRepository;
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_services_share_one_store() {
        let dir = tempfile::tempdir().unwrap();
        let core = AppCore::new(
            Arc::new(InMemoryRepository::default()),
            McpArtifact::new(dir.path().join("mcp.json")),
        );

        let config = ServerConfiguration::url("https://a.example.com", BTreeMap::new()).unwrap();
        core.servers()
            .create(CreateServerInput::new("alpha", config).enabled(true))
            .await
            .unwrap();

        let exported = core.export().export(false).await.unwrap();
        assert!(exported.contains("alpha"));

        let snapshot = core
            .monitor(Duration::from_secs(1), CancellationToken::new())
            .poll_once()
            .await
            .unwrap();
        assert_eq!(snapshot.enabled(), 1);
        assert_eq!(core.sync().sync_all().await.unwrap().added, 1);
    }
}
