use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Configuration file {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures while supervising the external Supabase MCP server process.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Failed to start server executable {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to check server process status: {source}")]
    Poll {
        #[source]
        source: io::Error,
    },
    #[error("Failed to wait for server process exit: {source}")]
    Wait {
        #[source]
        source: io::Error,
    },
    #[error("Failed to capture server output: {source}")]
    CaptureOutput {
        #[source]
        source: io::Error,
    },
    #[error("Failed to wait for interrupt signal: {source}")]
    Signal {
        #[source]
        source: io::Error,
    },
    #[error("Failed to terminate server process (pid={pid:?}): {source}")]
    Terminate {
        pid: Option<u32>,
        #[source]
        source: io::Error,
    },
}
