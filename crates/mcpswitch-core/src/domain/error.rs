//! Domain error taxonomy.
//!
//! Every fallible domain or service operation returns a [`DomainError`].
//! Storage failures arrive as [`RepositoryError`] at the port boundary and
//! are folded into this type so callers only match on one enum.

use thiserror::Error;

use crate::ports::RepositoryError;

/// Business-rule and orchestration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Server name failed validation (empty, too long).
    #[error("{0}")]
    InvalidName(String),

    /// Server id failed validation.
    #[error("{0}")]
    InvalidId(String),

    /// Configuration failed validation or could not be parsed.
    #[error("{0}")]
    InvalidConfiguration(String),

    /// A server required by the operation does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A server with the same name already exists.
    #[error("{0}")]
    AlreadyExists(String),

    /// The server changed underneath the operation.
    ///
    /// Not raised by the current services; reserved for optimistic
    /// concurrency checks.
    #[error("{0}")]
    StateConflict(String),

    /// I/O, serialization or storage failure.
    #[error("{0}")]
    OperationFailed(String),
}

impl DomainError {
    /// Short hint shown to users after the error message.
    pub const fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "Please provide a non-empty server name (max 255 characters)",
            Self::InvalidId(_) => "Server ID must be a non-empty identifier",
            Self::InvalidConfiguration(_) => {
                "Configuration must be a valid command-based or URL-based config"
            }
            Self::NotFound(_) => "Check if the server exists and try again",
            Self::AlreadyExists(_) => "Use a different server name or update the existing one",
            Self::StateConflict(_) => "The server state may have changed; refresh and try again",
            Self::OperationFailed(_) => "Check the logs for details",
        }
    }

    /// Stable kind label, used in logs and CLI output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => "invalid_name",
            Self::InvalidId(_) => "invalid_id",
            Self::InvalidConfiguration(_) => "invalid_configuration",
            Self::NotFound(_) => "not_found",
            Self::AlreadyExists(_) => "already_exists",
            Self::StateConflict(_) => "state_conflict",
            Self::OperationFailed(_) => "operation_failed",
        }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Duplicate(name) => {
                Self::AlreadyExists(format!("Server with name '{name}' already exists"))
            }
            RepositoryError::Storage(msg) | RepositoryError::Serialization(msg) => {
                Self::OperationFailed(msg)
            }
            RepositoryError::Invalid(err) => err,
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        Self::OperationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::OperationFailed(format!("JSON error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_maps_to_already_exists() {
        let err: DomainError = RepositoryError::Duplicate("alpha".to_string()).into();
        assert!(matches!(err, DomainError::AlreadyExists(ref m) if m.contains("alpha")));
        assert_eq!(err.kind(), "already_exists");
    }

    #[test]
    fn test_storage_maps_to_operation_failed() {
        let err: DomainError = RepositoryError::Storage("disk full".to_string()).into();
        assert_eq!(err, DomainError::OperationFailed("disk full".to_string()));
    }

    #[test]
    fn test_display_is_message_only() {
        let err = DomainError::NotFound("Server with ID x not found".to_string());
        assert_eq!(err.to_string(), "Server with ID x not found");
        assert_eq!(
            err.recovery_suggestion(),
            "Check if the server exists and try again"
        );
    }
}
