//! CLI argument definitions and command dispatch.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::{resolve_config_path, LaunchProfile};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    /// Serve the demo tool over stdio (default when no subcommand is given).
    Serve,
    /// Supervise the external Supabase MCP server executable.
    Launch(LaunchProfile),
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Launch the external Supabase MCP server and print its capabilities.
    #[command(about = "Launch the external Supabase MCP server and print its capabilities")]
    Launch(LaunchArgs),
}

/// Arguments for `launch`.
#[derive(Debug, Clone, Args)]
#[command(
    after_help = "Hint: `supabase-mcp-demo launch --executable <PATH>` runs without a config.toml."
)]
pub struct LaunchArgs {
    /// Server executable (overrides `[launcher].executable_path` in config.toml).
    #[arg(long = "executable")]
    pub executable_override: Option<PathBuf>,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Supabase MCP demo (stdio tool server, plus a launcher for the real server)",
    long_about = None
)]
pub struct DemoArgs {
    /// Path to config.toml (overrides MCP_CONFIG_PATH).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl DemoArgs {
    /// Parse CLI args into either serve mode or launcher mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        match self.command {
            Some(CliCommand::Launch(launch)) => {
                let config_path = resolve_config_path(self.config_override)?;
                Ok(ParsedCommand::Launch(LaunchProfile {
                    config_path,
                    executable_override: launch.executable_override,
                }))
            }
            None => Ok(ParsedCommand::Serve),
        }
    }
}
