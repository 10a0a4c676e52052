//! Core domain, ports and services for `mcpswitch`.
//!
//! `mcpswitch` keeps a catalogue of MCP server profiles and mirrors the
//! enabled ones into an external `mcp.json` artifact. This crate holds
//! everything that does not depend on a concrete storage engine or user
//! interface; adapters wire a [`ports::ServerRepository`] into an
//! [`AppCore`].

#![deny(unused_crate_dependencies)]

pub mod artifact;
pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use artifact::McpArtifact;
pub use config::AppConfig;
pub use domain::{
    ConfigurationExporter, DomainError, McpServer, McpServerParts, ServerConfiguration,
};
pub use ports::{RepositoryError, ServerRepository};
pub use services::{
    AppCore, CreateServerInput, ExportService, ImportResult, ImportService, ServerService,
    ServerSnapshot, ServerStatus, StoreHandle, StoreMonitor, SyncResult, SyncService,
};

// Re-export path utilities
pub use paths::{PathError, artifact_path, data_root, database_path, default_artifact_path};

// Used only by the integration tests under tests/
#[cfg(test)]
use mcpswitch_db as _;
