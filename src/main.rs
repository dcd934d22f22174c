//! Entry point for the Supabase MCP demo.
use std::process::ExitCode;

use clap::Parser;
use supabase_mcp_demo::{
    cli::{DemoArgs, ParsedCommand},
    launcher,
    lib::telemetry,
    server::runtime::{self, RuntimeExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = DemoArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Serve => runtime::run_server().await,
        ParsedCommand::Launch(profile) => launcher::run_launch(profile)
            .await
            .map_err(RuntimeExit::from_error),
    }
}
