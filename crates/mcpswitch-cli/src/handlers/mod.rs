//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Parse CLI-specific input, call `AppCore`, format output for the terminal
//!
//! Handlers never touch the repository or the pool directly.

pub mod add;
pub mod export;
pub mod import;
pub mod list;
pub mod paths;
pub mod remove;
pub mod status;
pub mod sync;
pub mod toggle;
pub mod watch;
