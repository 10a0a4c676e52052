//! Server repository trait and error types.
//!
//! This module defines the storage abstraction for server records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DomainError, McpServer};

/// Storage-level errors for server persistence.
///
/// Converted into [`DomainError`] at the service boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record carries the requested id.
    #[error("{0}")]
    NotFound(String),

    /// Another record already uses this name.
    #[error("Duplicate server name: {0}")]
    Duplicate(String),

    /// Storage backend error (database, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored configuration could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A stored row no longer satisfies the record invariants.
    #[error(transparent)]
    Invalid(DomainError),
}

/// Repository trait for server persistence.
///
/// # Design Rules
///
/// - Lists are ordered by name ascending
/// - `save()` upserts by id; name uniqueness is enforced by storage and a
///   collision yields `Duplicate` rather than replacing the other record
/// - Every record returned has been re-validated
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Exact lookup by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<McpServer>, RepositoryError>;

    /// All records.
    async fn find_all(&self) -> Result<Vec<McpServer>, RepositoryError>;

    /// Records with `is_enabled == true`.
    async fn find_enabled(&self) -> Result<Vec<McpServer>, RepositoryError>;

    /// Case-sensitive substring match on name.
    async fn find_by_name(&self, name: &str) -> Result<Vec<McpServer>, RepositoryError>;

    /// Insert or replace by id.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if a different record already uses the name
    /// - `Storage` / `Serialization` for backend failures
    async fn save(&self, server: &McpServer) -> Result<(), RepositoryError>;

    /// Remove by id.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record carries the id
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;

    async fn enabled_count(&self) -> Result<usize, RepositoryError>;
}
