/// Static server metadata advertised during the MCP handshake.
pub const SERVER_NAME: &str = "supabase-mcp-demo";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions() -> String {
    format!(
        "{SERVER_NAME} exposes a single `supabase_demo` echo tool over stdio. \
         Call it with a `message` string to get it echoed back."
    )
}
