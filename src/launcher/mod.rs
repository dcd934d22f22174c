//! Supervise one external Supabase MCP server process for manual inspection.
//!
//! `launch` spawns the configured executable, verifies it survives its
//! startup window, prints the static capability listing, then blocks until
//! Ctrl+C or child exit. Cleanup (terminate + reap) runs on every exit path.
mod capabilities;
mod process;

pub use capabilities::capability_listing;
pub use process::{ManagedServerProcess, ShutdownOutcome};

use std::{future::Future, io, process::Output, time::Duration};

use anyhow::Result;
use tokio::{signal, time};
use tracing::info;
use uuid::Uuid;

use crate::{
    cli::LaunchProfile,
    lib::{
        errors::{ConfigError, LaunchError},
        telemetry::LaunchSpan,
    },
    server::config::{DemoConfig, LauncherSection},
};

/// How a launch session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Child exited during the startup wait; its captured output was printed.
    ExitedAtStartup,
    /// Ctrl+C broke the idle wait; the child was terminated.
    Interrupted,
    /// The child exited on its own while idling.
    ServerExited,
}

impl LaunchOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            LaunchOutcome::ExitedAtStartup => "exited_at_startup",
            LaunchOutcome::Interrupted => "interrupted",
            LaunchOutcome::ServerExited => "server_exited",
        }
    }
}

/// Entry point for the `launch` subcommand.
pub async fn run_launch(profile: LaunchProfile) -> Result<()> {
    let settings = resolve_settings(&profile)?;
    run_launcher(&settings).await?;
    Ok(())
}

/// Resolve launcher settings: CLI `--executable` override skips config.toml.
fn resolve_settings(profile: &LaunchProfile) -> Result<LauncherSection, ConfigError> {
    match &profile.executable_override {
        Some(path) => Ok(LauncherSection::with_executable(path.clone())),
        None => {
            DemoConfig::load_from_path(profile.config_path.clone()).map(|config| config.launcher)
        }
    }
}

/// Supervise the server process through startup, idle, and shutdown.
pub async fn run_launcher(settings: &LauncherSection) -> Result<LaunchOutcome, LaunchError> {
    launch_with_interrupt(settings, signal::ctrl_c()).await
}

/// The full launch flow with the interrupt source injected.
///
/// The interrupt future is armed before the startup wait so Ctrl+C during
/// the sleep still reaches the cleanup step instead of killing the launcher
/// outright and orphaning the child.
async fn launch_with_interrupt<F>(
    settings: &LauncherSection,
    interrupt: F,
) -> Result<LaunchOutcome, LaunchError>
where
    F: Future<Output = io::Result<()>>,
{
    println!("Starting Supabase MCP server...");

    let session_id = Uuid::new_v4();
    let span = LaunchSpan::start(session_id, &settings.executable_path.to_string_lossy());
    let mut server_process = ManagedServerProcess::spawn(&settings.executable_path)?;

    tokio::pin!(interrupt);

    let startup_interrupt = tokio::select! {
        received = &mut interrupt => Some(received),
        _ = time::sleep(Duration::from_secs(settings.startup_wait_secs)) => None,
    };
    if let Some(received) = startup_interrupt {
        received.map_err(|source| LaunchError::Signal { source })?;
        println!();
        println!("Stopping server...");
        let shutdown = server_process.shutdown().await?;
        if let ShutdownOutcome::Terminated(_) = shutdown {
            println!("Server stopped.");
        }
        span.finish(LaunchOutcome::Interrupted.as_str(), shutdown.status().code());
        return Ok(LaunchOutcome::Interrupted);
    }

    if server_process.poll_exit()?.is_some() {
        let output = server_process.into_captured_output().await?;
        report_startup_failure(&output);
        span.finish(LaunchOutcome::ExitedAtStartup.as_str(), output.status.code());
        return Ok(LaunchOutcome::ExitedAtStartup);
    }

    println!("Supabase MCP server is running!");
    println!("{}", capability_listing());
    println!();
    println!("Server is running. Press Ctrl+C to stop...");

    let (outcome, exit_code) = supervise(&mut server_process, interrupt).await?;
    span.finish(outcome.as_str(), exit_code);
    Ok(outcome)
}

/// Idle until interrupt or child exit, then run the guaranteed cleanup step.
async fn supervise<F>(
    server_process: &mut ManagedServerProcess,
    interrupt: F,
) -> Result<(LaunchOutcome, Option<i32>), LaunchError>
where
    F: Future<Output = io::Result<()>>,
{
    let idle = idle_until_shutdown(server_process, interrupt).await;
    // Cleanup must run even when the idle wait itself failed.
    let shutdown = server_process.shutdown().await;

    let outcome = idle?;
    let shutdown = shutdown?;
    if let ShutdownOutcome::Terminated(_) = shutdown {
        println!("Server stopped.");
    }
    Ok((outcome, shutdown.status().code()))
}

/// Block until the interrupt future resolves or the child exits on its own.
///
/// This replaces the original 1-second poll loop with a signal wait; the
/// observable behavior is unchanged.
async fn idle_until_shutdown<F>(
    server_process: &mut ManagedServerProcess,
    interrupt: F,
) -> Result<LaunchOutcome, LaunchError>
where
    F: Future<Output = io::Result<()>>,
{
    tokio::select! {
        received = interrupt => {
            received.map_err(|source| LaunchError::Signal { source })?;
            println!();
            println!("Stopping server...");
            Ok(LaunchOutcome::Interrupted)
        }
        status = server_process.wait() => {
            let status = status?;
            info!(
                target: "supabase_mcp_demo::launcher",
                exit_code = status.code(),
                "Server process exited on its own"
            );
            Ok(LaunchOutcome::ServerExited)
        }
    }
}

fn report_startup_failure(output: &Output) {
    println!("Server failed to start:");
    println!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
    println!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
}
