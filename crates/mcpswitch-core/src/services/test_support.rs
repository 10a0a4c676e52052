//! In-memory repository used by service unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::McpServer;
use crate::ports::{RepositoryError, ServerRepository};

#[derive(Default)]
pub struct InMemoryRepository {
    servers: Mutex<HashMap<String, McpServer>>,
}

impl InMemoryRepository {
    fn sorted(&self, keep: impl Fn(&McpServer) -> bool) -> Vec<McpServer> {
        let servers = self.servers.lock().unwrap();
        let mut out: Vec<McpServer> = servers.values().filter(|s| keep(s)).cloned().collect();
        out.sort_by(|a, b| a.name().cmp(b.name()));
        out
    }
}

#[async_trait]
impl ServerRepository for InMemoryRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<McpServer>, RepositoryError> {
        Ok(self.servers.lock().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<McpServer>, RepositoryError> {
        Ok(self.sorted(|_| true))
    }

    async fn find_enabled(&self) -> Result<Vec<McpServer>, RepositoryError> {
        Ok(self.sorted(McpServer::is_enabled))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<McpServer>, RepositoryError> {
        Ok(self.sorted(|s| s.name().contains(name)))
    }

    async fn save(&self, server: &McpServer) -> Result<(), RepositoryError> {
        let mut servers = self.servers.lock().unwrap();
        if servers
            .values()
            .any(|s| s.name() == server.name() && s.id() != server.id())
        {
            return Err(RepositoryError::Duplicate(server.name().to_string()));
        }
        servers.insert(server.id().to_string(), server.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.servers
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Server with ID {id} not found")))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.servers.lock().unwrap().len())
    }

    async fn enabled_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.sorted(McpServer::is_enabled).len())
    }
}
