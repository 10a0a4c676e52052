//! Export of the enabled-server projection as JSON text.

use std::path::Path;

use serde_json::{Map, Value};

use crate::artifact::SERVERS_KEY;
use crate::domain::{ConfigurationExporter, DomainError};
use crate::ports::ServerRepository;

use super::store_handle::StoreHandle;

#[derive(Clone)]
pub struct ExportService {
    store: StoreHandle,
}

impl ExportService {
    pub const fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    /// Render the export document.
    ///
    /// Without metadata the shape is `{"mcpServers": {..}}`; with metadata it
    /// is `{"servers": {..}, "metadata": {..}}`.
    pub async fn export(&self, include_metadata: bool) -> Result<String, DomainError> {
        let servers = self.store.repo().find_all().await?;
        let document = if include_metadata {
            ConfigurationExporter::export_with_metadata(&servers)
        } else {
            let mut root = Map::new();
            root.insert(
                SERVERS_KEY.to_string(),
                Value::Object(ConfigurationExporter::export_enabled(&servers)),
            );
            Value::Object(root)
        };
        ConfigurationExporter::to_json(&document, true)
    }

    /// Render and write the export document to `path`.
    pub async fn export_to_file(
        &self,
        path: &Path,
        include_metadata: bool,
    ) -> Result<String, DomainError> {
        let text = self.export(include_metadata).await?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, &text).await?;

        tracing::info!(path = %path.display(), "Exported configuration");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::domain::{McpServer, ServerConfiguration};
    use crate::services::test_support::InMemoryRepository;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    async fn service_with(servers: &[(&str, bool)]) -> ExportService {
        let repo = Arc::new(InMemoryRepository::default());
        for (name, enabled) in servers {
            let config = ServerConfiguration::command("npx", vec![(*name).to_string()], BTreeMap::new())
                .unwrap();
            let server = McpServer::create(*name, config, *enabled, None).unwrap();
            repo.save(&server).await.unwrap();
        }
        ExportService::new(StoreHandle::new(repo))
    }

    #[tokio::test]
    async fn test_plain_export_shape() {
        let service = service_with(&[("alpha", true), ("beta", false)]).await;
        let text = service.export(false).await.unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value,
            json!({"mcpServers": {"alpha": {"command": "npx", "args": ["alpha"], "env": {}}}})
        );
    }

    #[tokio::test]
    async fn test_metadata_export_shape() {
        let service = service_with(&[("alpha", true), ("beta", false)]).await;
        let value: Value = serde_json::from_str(&service.export(true).await.unwrap()).unwrap();

        assert_eq!(value["metadata"]["total"], 2);
        assert_eq!(value["metadata"]["enabled"], 1);
        assert_eq!(value["metadata"]["disabled"], 1);
        assert!(value["metadata"]["exportedAt"].is_string());
        assert!(value["servers"].get("alpha").is_some());
    }

    #[tokio::test]
    async fn test_export_to_file() {
        let service = service_with(&[("alpha", true)]).await;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("export.json");

        let text = service.export_to_file(&path, false).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }
}
