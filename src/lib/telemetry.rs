//! Telemetry initialization and dispatch logging helpers.

use std::io::IsTerminal;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use super::log_level::LogLevelSelection;

/// Install the process-wide `tracing` subscriber at the selected level.
///
/// Only the first call installs a subscriber. A rejected `log-level` value is
/// reported right after installation so the notice itself is filtered by the
/// fallback level.
pub fn init_tracing(selection: &LogLevelSelection) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::default().add_directive(selection.level.level_filter().into());
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))?;

    selection.report_rejected();
    debug!(
        target: "galaxy::log",
        level = %selection.level,
        "Log level applied"
    );
    Ok(())
}

/// Emit the resolved configuration of the selected mode.
///
/// Secret fields are skipped by the configuration types' `Serialize` impls.
pub fn emit_mode_config<T: Serialize>(mode: &str, config: &T) {
    let rendered = serde_json::to_string(config)
        .unwrap_or_else(|err| format!("<unserializable configuration: {err}>"));
    info!(
        target: "galaxy::dispatch",
        mode = mode,
        config = %rendered,
        "Resolved mode configuration"
    );
}
