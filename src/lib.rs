//! Library crate root re-exporting server, launcher, and tool modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod launcher;
pub mod server;
pub mod tools;
