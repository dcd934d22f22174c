use std::sync::Arc;

use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ErrorData, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    ServerHandler,
};

use super::server_info::{SERVER_NAME, SERVER_VERSION};
use crate::tools;

/// The demo MCP server: static metadata plus the `supabase_demo` tool.
#[derive(Clone)]
pub struct SupabaseDemoServer {
    instructions: Arc<String>,
}

impl SupabaseDemoServer {
    pub fn new(instructions: String) -> Self {
        Self {
            instructions: Arc::new(instructions),
        }
    }
}

impl ServerHandler for SupabaseDemoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: SERVER_VERSION.into(),
                ..Implementation::default()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(tools::handle_list_tools())
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(tools::handle_call_tool(
            &request.name,
            request.arguments.as_ref(),
        ))
    }
}
