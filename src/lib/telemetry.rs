//! Telemetry initialization and launch session span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
///
/// All diagnostics go to stderr so serve mode keeps stdout free for the
/// MCP transport.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a launch session.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    session_id: Uuid,
}

impl LaunchSpan {
    /// Start a launch session span.
    pub fn start(session_id: Uuid, executable: &str) -> Self {
        let span = info_span!(
            target: "supabase_mcp_demo::launcher",
            "launch_session",
            %session_id,
            executable
        );
        Self {
            span,
            started_at: Instant::now(),
            session_id,
        }
    }

    /// Close the span while recording outcome and child exit info.
    pub fn finish(self, outcome: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "supabase_mcp_demo::launcher",
            session_id = %self.session_id,
            outcome = outcome,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed launch session"
        );
    }
}

/// Emit serve mode startup to `tracing`.
///
/// This is the one-line readiness notice on stderr that MCP clients and
/// humans inspecting the process see.
pub fn emit_serve_mode(server_name: &str, server_version: &str, instructions: &str) {
    info!(
        target: "supabase_mcp_demo::runtime",
        transport = "stdio",
        server_name = server_name,
        server_version = server_version,
        instructions = instructions,
        "Supabase MCP demo server running on stdio"
    );
}
