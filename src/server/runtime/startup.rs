use std::process::ExitCode;

use anyhow::Error;
use rmcp::ServiceExt;
use tracing::{error, info};

use crate::{
    lib::telemetry,
    server::runtime::{build_instructions, SupabaseDemoServer, SERVER_NAME, SERVER_VERSION},
};

/// Bundles a runtime error message with an exit code for `main`.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Start the demo MCP server on stdio and serve until the transport closes.
pub async fn run_server() -> Result<(), RuntimeExit> {
    let instructions = build_instructions();
    let server = SupabaseDemoServer::new(instructions.clone());

    telemetry::emit_serve_mode(SERVER_NAME, SERVER_VERSION, &instructions);

    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;

    // A closed transport is the normal shutdown path; protocol errors after
    // a successful startup are reported on stderr, not escalated.
    match running.waiting().await {
        Ok(reason) => {
            info!(
                target: "supabase_mcp_demo::runtime",
                reason = ?reason,
                "Transport closed; shutting down"
            );
        }
        Err(err) => {
            error!(
                target: "supabase_mcp_demo::runtime",
                error = %err,
                "MCP serving task failed"
            );
        }
    }
    Ok(())
}
