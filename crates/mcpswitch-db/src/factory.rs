//! Composition utilities for building `AppCore` with a `SQLite` backend.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

use mcpswitch_core::artifact::McpArtifact;
use mcpswitch_core::services::AppCore;

use crate::repositories::SqliteServerRepository;
use crate::setup::setup_database;

/// Factory for wiring `SQLite` repositories into the core.
pub struct CoreFactory;

impl CoreFactory {
    /// Open (or create) the database at `db_path` with the full schema.
    pub async fn create_pool(db_path: &Path) -> anyhow::Result<SqlitePool> {
        setup_database(db_path).await
    }

    /// Create a server repository from a pool.
    pub fn server_repository(pool: SqlitePool) -> Arc<SqliteServerRepository> {
        Arc::new(SqliteServerRepository::new(pool))
    }

    /// Build a complete `AppCore` from a pool and the artifact location.
    ///
    /// ```ignore
    /// let pool = setup_database(&config.database_path).await?;
    /// let core = CoreFactory::build_app_core(pool, &config.artifact_path);
    /// ```
    pub fn build_app_core(pool: SqlitePool, artifact_path: &Path) -> AppCore {
        AppCore::new(
            Self::server_repository(pool),
            McpArtifact::new(artifact_path),
        )
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// A repository over this database.
    pub fn repository(&self) -> Arc<SqliteServerRepository> {
        CoreFactory::server_repository(self.pool.clone())
    }

    /// An `AppCore` over this database and the given artifact path.
    pub fn app_core(&self, artifact_path: &Path) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone(), artifact_path)
    }
}
