use std::time::Duration;

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, CallToolResult, ClientInfo, RawContent},
    serve_client,
};
use serde_json::json;
use tokio::time::timeout;

use crate::common::spawn_server_process;

fn text_of(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(t) => t.text.clone(),
        other => panic!("expected text content, got {other:?}"),
    }
}

#[tokio::test]
async fn inspector_style_spawn_lists_and_calls_the_demo_tool() -> Result<()> {
    let (mut child, transport, stderr_task) = spawn_server_process().await?;

    let client = serve_client(ClientInfo::default(), transport).await?;

    let list = client.list_tools(None).await?;
    assert_eq!(
        list.tools.len(),
        1,
        "list_tools should advertise exactly the demo tool: {:?}",
        list.tools
    );
    assert_eq!(list.tools[0].name.as_ref(), "supabase_demo");

    let echoed = client
        .call_tool(CallToolRequestParam {
            name: "supabase_demo".into(),
            arguments: json!({ "message": "hi" }).as_object().cloned(),
        })
        .await?;
    assert_ne!(echoed.is_error, Some(true));
    assert_eq!(text_of(&echoed), "Supabase MCP Demo: hi");

    let defaulted = client
        .call_tool(CallToolRequestParam {
            name: "supabase_demo".into(),
            arguments: json!({}).as_object().cloned(),
        })
        .await?;
    assert_eq!(text_of(&defaulted), "Supabase MCP Demo: No message provided");

    let unknown = client
        .call_tool(CallToolRequestParam {
            name: "foo".into(),
            arguments: None,
        })
        .await?;
    assert_eq!(
        unknown.is_error,
        Some(true),
        "unknown tool must be a structured error, not a protocol failure"
    );
    assert_eq!(text_of(&unknown), "Unknown tool: foo");

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}
