//! CLI-specific error types and mappings.
//!
//! Maps [`DomainError`] and path failures onto exit codes and user-facing
//! messages.

use mcpswitch_core::{DomainError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{message}")]
    Core {
        message: String,
        suggestion: Option<&'static str>,
    },

    /// Argument parsing or validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Referenced server or file does not exist.
    #[error("{0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core { .. } => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }

    /// Hint printed under the error message, if any.
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Core { suggestion, .. } => *suggestion,
            _ => None,
        }
    }

    /// The line printed for a failed command.
    ///
    /// Domain failures carry their kind, e.g. `Error [not_found]: ...`.
    pub fn render(err: &anyhow::Error) -> String {
        let cli = Self::from_anyhow(err);
        match err.downcast_ref::<DomainError>() {
            Some(domain) => format!("Error [{}]: {cli}", domain.kind()),
            None => format!("Error: {cli}"),
        }
    }

    /// Classify an error bubbled up through `anyhow`.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        if let Some(cli) = err.downcast_ref::<Self>() {
            return cli.clone();
        }
        if let Some(domain) = err.downcast_ref::<DomainError>() {
            return domain.clone().into();
        }
        if let Some(path) = err.downcast_ref::<PathError>() {
            return Self::Config(path.to_string());
        }
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            return Self::Io(io.to_string());
        }
        Self::Core {
            message: format!("{err:#}"),
            suggestion: None,
        }
    }
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        let suggestion = Some(err.recovery_suggestion());
        match err {
            DomainError::InvalidName(msg)
            | DomainError::InvalidId(msg)
            | DomainError::InvalidConfiguration(msg) => Self::Arguments(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::AlreadyExists(message)
            | DomainError::StateConflict(message)
            | DomainError::OperationFailed(message) => Self::Core {
                message,
                suggestion,
            },
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
