use tracing::info;

use super::DemoConfig;

pub fn log_loaded(config: &DemoConfig) {
    info!(
        target: "supabase_mcp_demo::config",
        path = %config.source_path.display(),
        executable_path = %config.launcher.executable_path.display(),
        startup_wait_secs = config.launcher.startup_wait_secs,
        "Configuration file loaded successfully"
    );
}
