//! Load and validate launcher configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod launcher;
pub mod telemetry;

pub use launcher::{
    parse_launcher_section, LauncherSection, RawLauncherSection, DEFAULT_STARTUP_WAIT_SECS,
};

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub launcher: LauncherSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawDemoConfig {
    launcher: Option<RawLauncherSection>,
}

impl DemoConfig {
    /// Load configuration from a specific path.
    ///
    /// Path resolution (CLI override, `MCP_CONFIG_PATH`, default) happens in
    /// the CLI layer; this only ever sees the resolved path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "supabase_mcp_demo::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "supabase_mcp_demo::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawDemoConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "supabase_mcp_demo::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "supabase_mcp_demo::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawDemoConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let launcher = parse_launcher_section(raw.launcher, &path)?;

        Ok(Self {
            launcher,
            source_path: path,
        })
    }
}
