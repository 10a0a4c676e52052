//! Small helpers shared by handlers.

pub mod input;
pub mod pairs;
