//! Domain types for mcpswitch.
//!
//! These types describe server profiles and their configurations independent
//! of any storage or file format concerns.

mod error;
mod export;
mod server;
mod server_config;

pub use error::DomainError;
pub use export::ConfigurationExporter;
pub use server::{MAX_NAME_LEN, McpServer, McpServerParts};
pub use server_config::ServerConfiguration;
