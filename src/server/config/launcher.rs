use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::errors::ConfigError;

/// Seconds to wait after spawn before the liveness check.
pub const DEFAULT_STARTUP_WAIT_SECS: u64 = 2;
const MAX_STARTUP_WAIT_SECS: u64 = 120;

/// Launcher settings for the external Supabase MCP server executable.
#[derive(Debug, Clone)]
pub struct LauncherSection {
    pub executable_path: PathBuf,
    pub startup_wait_secs: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLauncherSection {
    pub executable_path: Option<PathBuf>,
    pub startup_wait_secs: Option<u64>,
}

impl LauncherSection {
    /// Section built from a CLI `--executable` override, config file unread.
    pub fn with_executable(executable_path: PathBuf) -> Self {
        Self {
            executable_path,
            startup_wait_secs: DEFAULT_STARTUP_WAIT_SECS,
        }
    }
}

pub fn parse_launcher_section(
    raw: Option<RawLauncherSection>,
    path: &Path,
) -> Result<LauncherSection, ConfigError> {
    let launcher_raw = raw.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "launcher",
    })?;

    let executable_path = launcher_raw
        .executable_path
        .ok_or(ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "launcher.executable_path",
        })?;
    if !executable_path.is_absolute() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "launcher.executable_path",
            message: "Use an absolute path to the server executable".into(),
        });
    }

    let startup_wait_secs = launcher_raw
        .startup_wait_secs
        .unwrap_or(DEFAULT_STARTUP_WAIT_SECS);
    validate_startup_wait(startup_wait_secs, path)?;

    Ok(LauncherSection {
        executable_path,
        startup_wait_secs,
    })
}

fn validate_startup_wait(secs: u64, path: &Path) -> Result<(), ConfigError> {
    if (1..=MAX_STARTUP_WAIT_SECS).contains(&secs) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field: "launcher.startup_wait_secs",
        message: format!("Use a wait in the range 1-{MAX_STARTUP_WAIT_SECS} seconds"),
    })
}
