//! Runtime configuration resolved from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths::{self, PathError};

/// Environment variable overriding the monitor poll interval, in seconds.
pub const POLL_SECS_ENV: &str = "MCPSWITCH_POLL_SECS";

/// Default monitor poll interval.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Resolved locations and timings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub artifact_path: PathBuf,
    pub auto_import_path: PathBuf,
    pub poll_interval: Duration,
}

impl AppConfig {
    /// Resolve from `MCPSWITCH_*` environment variables and platform defaults.
    ///
    /// Creates the database directory if it does not exist yet.
    pub fn from_env() -> Result<Self, PathError> {
        let database_path = paths::database_path()?;
        let artifact_path = paths::artifact_path()?;
        let poll_interval = parse_poll_interval(env::var(POLL_SECS_ENV).ok().as_deref());

        Ok(Self {
            database_path,
            auto_import_path: artifact_path.clone(),
            artifact_path,
            poll_interval,
        })
    }

    /// Override the database location.
    #[must_use]
    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }

    /// Override the artifact location; the auto-import source follows it.
    #[must_use]
    pub fn with_artifact_path(mut self, path: PathBuf) -> Self {
        self.auto_import_path.clone_from(&path);
        self.artifact_path = path;
        self
    }
}

/// Seconds from the environment, clamped to at least one; unparseable
/// values fall back to the default.
fn parse_poll_interval(raw: Option<&str>) -> Duration {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .map_or(DEFAULT_POLL_INTERVAL, |secs| Duration::from_secs(secs.max(1)))
}
