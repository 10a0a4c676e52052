//! Periodic store polling for long-lived presentation layers.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::{DomainError, McpServer};
use crate::ports::ServerRepository;

use super::store_handle::StoreHandle;

/// Read-only view of the store at one poll.
#[derive(Debug, Clone)]
pub struct ServerSnapshot {
    pub servers: Vec<McpServer>,
    pub taken_at: DateTime<Utc>,
}

impl ServerSnapshot {
    fn empty() -> Self {
        Self {
            servers: Vec::new(),
            taken_at: Utc::now(),
        }
    }

    pub fn total(&self) -> usize {
        self.servers.len()
    }

    pub fn enabled(&self) -> usize {
        self.servers.iter().filter(|s| s.is_enabled()).count()
    }

    /// Same servers in the same state, ignoring when the poll happened.
    ///
    /// Record equality only looks at ids, so state is compared field by field.
    fn same_state(&self, other: &Self) -> bool {
        self.servers.len() == other.servers.len()
            && self.servers.iter().zip(&other.servers).all(|(a, b)| {
                a.id() == b.id()
                    && a.name() == b.name()
                    && a.is_enabled() == b.is_enabled()
                    && a.modified_at() == b.modified_at()
            })
    }
}

/// Polls the store and publishes a [`ServerSnapshot`] whenever it changes.
pub struct StoreMonitor {
    store: StoreHandle,
    interval: Duration,
    cancel_token: CancellationToken,
}

impl StoreMonitor {
    pub const fn new(store: StoreHandle, poll_interval: Duration, cancel_token: CancellationToken) -> Self {
        Self {
            store,
            interval: poll_interval,
            cancel_token,
        }
    }

    /// Take one snapshot, waiting for any in-flight mutation first.
    pub async fn poll_once(&self) -> Result<ServerSnapshot, DomainError> {
        let _guard = self.store.lock().await;
        let servers = self.store.repo().find_all().await?;
        Ok(ServerSnapshot {
            servers,
            taken_at: Utc::now(),
        })
    }

    /// Start polling on a background task.
    ///
    /// The receiver starts with an empty placeholder. The first successful
    /// poll is always published, later ones only when the store state
    /// changes. The task ends when the token is cancelled.
    pub fn spawn(self) -> (watch::Receiver<ServerSnapshot>, JoinHandle<()>) {
        let (tx, rx) = watch::channel(ServerSnapshot::empty());
        let handle = tokio::spawn(self.run(tx));
        (rx, handle)
    }

    async fn run(self, tx: watch::Sender<ServerSnapshot>) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        debug!(interval_ms = self.interval.as_millis(), "Starting store monitor");

        let mut published = false;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match self.poll_once().await {
                        Ok(snapshot) => {
                            tx.send_if_modified(|current| {
                                if published && current.same_state(&snapshot) {
                                    return false;
                                }
                                published = true;
                                debug!(
                                    total = snapshot.total(),
                                    enabled = snapshot.enabled(),
                                    "Store snapshot changed"
                                );
                                *current = snapshot;
                                true
                            });
                        }
                        Err(e) => tracing::warn!(error = %e, "Store poll failed"),
                    }
                }
                () = self.cancel_token.cancelled() => {
                    debug!("Store monitor cancelled");
                    break;
                }
            }
        }
    }
}
