//! Shared access to the server store.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::ports::ServerRepository;

/// The repository plus the single-writer gate.
///
/// Every mutation and every monitor poll runs while holding the gate, so a
/// write-then-sync sequence is never interleaved with another. The gate is
/// not reentrant: code that already holds it receives a [`WriteGuard`]
/// instead of locking again.
#[derive(Clone)]
pub struct StoreHandle {
    repo: Arc<dyn ServerRepository>,
    gate: Arc<Mutex<()>>,
}

/// Proof that the caller holds the store gate.
pub struct WriteGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl StoreHandle {
    pub fn new(repo: Arc<dyn ServerRepository>) -> Self {
        Self {
            repo,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Acquire the gate, waiting for any in-flight mutation to finish.
    pub async fn lock(&self) -> WriteGuard<'_> {
        WriteGuard {
            _guard: self.gate.lock().await,
        }
    }

    /// The underlying repository.
    ///
    /// Reads may go straight through; writes belong under [`Self::lock`].
    pub fn repo(&self) -> &dyn ServerRepository {
        self.repo.as_ref()
    }
}
