//! `SQLite` implementation of the server repository.
//!
//! Configurations are stored as tagged JSON in `config_data`, with the
//! variant duplicated in `config_type`. Timestamps are REAL epoch seconds
//! with microsecond precision.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use mcpswitch_core::domain::{McpServer, McpServerParts, ServerConfiguration};
use mcpswitch_core::ports::{RepositoryError, ServerRepository};

const SELECT_COLUMNS: &str = "SELECT id, name, config_type, config_data, is_enabled, description, \
     created_at, modified_at FROM mcp_servers";

/// `SQLite` implementation of the server repository.
pub struct SqliteServerRepository {
    pool: SqlitePool,
}

impl SqliteServerRepository {
    /// Create a new `SQLite` server repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Internal row types for database queries
// ─────────────────────────────────────────────────────────────────────────────

#[derive(sqlx::FromRow)]
struct ServerRow {
    id: String,
    name: String,
    config_type: String,
    config_data: String,
    is_enabled: bool,
    description: Option<String>,
    created_at: f64,
    modified_at: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper functions
// ─────────────────────────────────────────────────────────────────────────────

#[allow(clippy::cast_precision_loss)]
fn to_epoch_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_micros() as f64 / 1_000_000.0
}

#[allow(clippy::cast_possible_truncation)]
fn from_epoch_seconds(secs: f64) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp_micros((secs * 1_000_000.0).round() as i64)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid timestamp: {secs}")))
}

/// Convert a row to a validated domain record.
fn row_to_server(row: ServerRow) -> Result<McpServer, RepositoryError> {
    let configuration: ServerConfiguration = serde_json::from_str(&row.config_data)
        .map_err(|e| {
            RepositoryError::Serialization(format!(
                "Invalid configuration for server '{}': {e}",
                row.name
            ))
        })?;

    if configuration.type_name() != row.config_type {
        return Err(RepositoryError::Serialization(format!(
            "Configuration type mismatch for server '{}': column says '{}', data says '{}'",
            row.name,
            row.config_type,
            configuration.type_name()
        )));
    }

    McpServer::new(McpServerParts {
        id: row.id,
        name: row.name,
        configuration,
        is_enabled: row.is_enabled,
        created_at: from_epoch_seconds(row.created_at)?,
        modified_at: from_epoch_seconds(row.modified_at)?,
        description: row.description,
    })
    .map_err(RepositoryError::Invalid)
}

fn rows_to_servers(rows: Vec<ServerRow>) -> Result<Vec<McpServer>, RepositoryError> {
    rows.into_iter().map(row_to_server).collect()
}

/// Map `SQLx` errors to `RepositoryError`.
fn map_sqlx_error(e: sqlx::Error, name: Option<&str>) -> RepositoryError {
    if let (sqlx::Error::Database(db), Some(name)) = (&e, name)
        && db.is_unique_violation()
        && db.message().contains("name")
    {
        return RepositoryError::Duplicate(name.to_string());
    }
    RepositoryError::Storage(e.to_string())
}

fn to_count(n: i64) -> Result<usize, RepositoryError> {
    usize::try_from(n).map_err(|e| RepositoryError::Storage(format!("Invalid count {n}: {e}")))
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ServerRepository for SqliteServerRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<McpServer>, RepositoryError> {
        let row: Option<ServerRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        row.map(row_to_server).transpose()
    }

    async fn find_all(&self) -> Result<Vec<McpServer>, RepositoryError> {
        let rows: Vec<ServerRow> = sqlx::query_as(&format!("{SELECT_COLUMNS} ORDER BY name"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        rows_to_servers(rows)
    }

    async fn find_enabled(&self) -> Result<Vec<McpServer>, RepositoryError> {
        let rows: Vec<ServerRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE is_enabled = 1 ORDER BY name"))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(e, None))?;

        rows_to_servers(rows)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<McpServer>, RepositoryError> {
        // instr() is case-sensitive, unlike LIKE
        let rows: Vec<ServerRow> =
            sqlx::query_as(&format!("{SELECT_COLUMNS} WHERE instr(name, ?) > 0 ORDER BY name"))
                .bind(name)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(e, None))?;

        rows_to_servers(rows)
    }

    async fn save(&self, server: &McpServer) -> Result<(), RepositoryError> {
        let config_data = serde_json::to_string(server.configuration())
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO mcp_servers
                (id, name, config_type, config_data, is_enabled, description, created_at, modified_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                config_type = excluded.config_type,
                config_data = excluded.config_data,
                is_enabled = excluded.is_enabled,
                description = excluded.description,
                modified_at = excluded.modified_at
            ",
        )
        .bind(server.id())
        .bind(server.name())
        .bind(server.configuration().type_name())
        .bind(config_data)
        .bind(server.is_enabled())
        .bind(server.description())
        .bind(to_epoch_seconds(server.created_at()))
        .bind(to_epoch_seconds(server.modified_at()))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, Some(server.name())))?;

        tracing::debug!(server_id = %server.id(), server_name = %server.name(), "Saved server row");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM mcp_servers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Server with ID {id} not found"
            )));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mcp_servers")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;
        to_count(n)
    }

    async fn enabled_count(&self) -> Result<usize, RepositoryError> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM mcp_servers WHERE is_enabled = 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, None))?;
        to_count(n)
    }
}
