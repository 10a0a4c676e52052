//! Shared CLI presentation utilities.
//!
//! Format-only helpers; nothing here touches the store.

pub mod server_display;
pub mod tables;

pub use server_display::{
    describe_target, display_server_details, display_server_row, display_table_header,
};
pub use tables::{format_optional, print_separator, truncate_string};
