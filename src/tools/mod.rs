//! MCP tools exposed by the demo server.

pub mod demo;

pub use demo::{demo_tool, handle_call_tool, handle_list_tools, SupabaseDemoArgs, DEMO_TOOL_NAME};
