//! Library crate root re-exporting the CLI, shared helpers, and launch modes.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod modes;
