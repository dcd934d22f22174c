//! The `supabase_demo` echo tool: descriptor and request handlers.
//!
//! The handlers are plain functions so they can be exercised directly in
//! tests; the server delegates to them from its `ServerHandler` impl.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, ListToolsResult, Tool};
use schemars::JsonSchema;
use serde::Deserialize;

pub const DEMO_TOOL_NAME: &str = "supabase_demo";
const DEMO_TOOL_DESCRIPTION: &str = "A simple demonstration of the Supabase MCP server";
const DEFAULT_MESSAGE: &str = "No message provided";

/// Arguments accepted by `supabase_demo`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SupabaseDemoArgs {
    /// A message to echo back
    pub message: String,
}

/// Descriptor advertised by `tools/list`.
pub fn demo_tool() -> Tool {
    Tool::new(DEMO_TOOL_NAME, DEMO_TOOL_DESCRIPTION, input_schema())
}

fn input_schema() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(SupabaseDemoArgs);
    let object = serde_json::to_value(schema)
        .ok()
        .and_then(|value| value.as_object().cloned())
        .unwrap_or_default();
    Arc::new(object)
}

/// `tools/list`: always exactly one descriptor, input ignored.
pub fn handle_list_tools() -> ListToolsResult {
    ListToolsResult {
        next_cursor: None,
        tools: vec![demo_tool()],
    }
}

/// `tools/call`: echo the message, or report an unknown tool as a
/// structured error result. The unknown-tool case is caller-visible and
/// recoverable; the server keeps serving.
pub fn handle_call_tool(name: &str, arguments: Option<&JsonObject>) -> CallToolResult {
    if name != DEMO_TOOL_NAME {
        return CallToolResult::error(vec![Content::text(format!("Unknown tool: {name}"))]);
    }

    let message = arguments
        .and_then(|args| args.get("message"))
        .and_then(|value| value.as_str())
        .unwrap_or(DEFAULT_MESSAGE);

    CallToolResult::success(vec![Content::text(format!("Supabase MCP Demo: {message}"))])
}
