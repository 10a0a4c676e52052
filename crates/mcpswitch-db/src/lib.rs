//! `SQLite` persistence for `mcpswitch`.
//!
//! Implements [`mcpswitch_core::ServerRepository`] on top of `sqlx` and
//! provides the factory used by adapters to build an
//! [`mcpswitch_core::AppCore`].

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqliteServerRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
