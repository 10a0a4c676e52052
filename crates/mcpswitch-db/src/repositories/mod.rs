//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod sqlite_server_repository;

pub use sqlite_server_repository::SqliteServerRepository;
