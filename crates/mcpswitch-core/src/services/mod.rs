//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports and domain logic. They don't know about
//! concrete storage implementations.

mod app_core;
mod export_service;
mod import_service;
mod monitor;
mod server_service;
mod store_handle;
mod sync_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use app_core::AppCore;
pub use export_service::ExportService;
pub use import_service::{ImportResult, ImportService};
pub use monitor::{ServerSnapshot, StoreMonitor};
pub use server_service::{CreateServerInput, ServerService, ServerStatus};
pub use store_handle::{StoreHandle, WriteGuard};
pub use sync_service::{SyncResult, SyncService};
