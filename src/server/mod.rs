//! Server-side modules: configuration and the MCP runtime.

pub mod config;
pub mod runtime;
