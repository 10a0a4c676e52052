//! CLI bootstrap - the composition root.
//!
//! The only place where the CLI wires infrastructure together: the `SQLite`
//! pool and repository come from `mcpswitch-db`, services from
//! `mcpswitch-core`. Handlers receive the composed [`CliContext`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use mcpswitch_core::AppConfig;
use mcpswitch_core::services::AppCore;
use mcpswitch_db::{CoreFactory, setup_database};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Resolved locations and intervals.
    pub app: AppConfig,
}

impl CliConfig {
    /// Resolve from the environment, then apply command-line overrides.
    pub fn resolve(db: Option<PathBuf>, artifact: Option<PathBuf>) -> Result<Self> {
        let mut app = AppConfig::from_env().context("Failed to resolve application paths")?;
        if let Some(path) = db {
            app = app.with_database_path(path);
        }
        if let Some(path) = artifact {
            app = app.with_artifact_path(path);
        }
        Ok(Self { app })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    /// The configuration the context was built from.
    pub config: CliConfig,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the resolved configuration.
    pub const fn config(&self) -> &AppConfig {
        &self.config.app
    }
}

/// Open the database and compose the services.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.app.database_path)
        .await
        .map_err(|e| {
            CliError::Database(format!(
                "Failed to open database at {}: {e:#}",
                config.app.database_path.display()
            ))
        })?;

    let app = CoreFactory::build_app_core(pool, &config.app.artifact_path);
    tracing::debug!(
        db = %config.app.database_path.display(),
        artifact = %config.app.artifact_path.display(),
        "CLI context ready"
    );

    Ok(CliContext { app, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_with_explicit_paths() {
        let dir = tempfile::tempdir().unwrap();
        let app = AppConfig {
            database_path: dir.path().join("data").join("test.db"),
            artifact_path: dir.path().join("mcp.json"),
            auto_import_path: dir.path().join("mcp.json"),
            poll_interval: std::time::Duration::from_secs(1),
        };

        let ctx = bootstrap(CliConfig { app }).await.unwrap();
        assert!(ctx.config().database_path.exists());
        assert_eq!(ctx.app().servers().status().await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn test_unopenable_database_is_database_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let app = AppConfig {
            database_path: blocker.join("mcpswitch.db"),
            artifact_path: dir.path().join("mcp.json"),
            auto_import_path: dir.path().join("mcp.json"),
            poll_interval: std::time::Duration::from_secs(1),
        };

        let Err(err) = bootstrap(CliConfig { app }).await else {
            panic!("expected bootstrap to fail");
        };
        assert_eq!(CliError::from_anyhow(&err).exit_code(), 73);
    }
}
