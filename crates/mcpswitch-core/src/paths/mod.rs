//! Path utilities for mcpswitch data directories and the external artifact.
//!
//! - Database location
//! - Artifact (`mcp.json`) location
//! - Application data root

mod artifact;
mod database;
mod error;
mod platform;

pub use artifact::{ARTIFACT_ENV, artifact_path, default_artifact_path};
pub use database::{DATABASE_FILE, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, normalize_user_path};
