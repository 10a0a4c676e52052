//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused

pub mod server_repository;

pub use server_repository::{RepositoryError, ServerRepository};

#[cfg(test)]
pub use server_repository::MockServerRepository;
