use std::process::ExitCode;

use anyhow::Error;

use super::Subsystems;
use crate::{
    cli::{LaunchProfile, ModeCommand, ModeSelector},
    lib::{errors::DispatchError, telemetry},
    modes::config::{build_proxy_config, build_runner_config, build_server_config},
};

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_dispatch(err: DispatchError) -> Self {
        Self {
            message: err.to_string(),
            exit_code: ExitCode::from(err.exit_code()),
        }
    }

    /// Print the failure on stderr and hand back the process exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("Failed to start galaxy: {}", self.message);
        self.exit_code
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Apply the log level, then dispatch the selected mode.
pub async fn launch<S: Subsystems>(profile: LaunchProfile, subsystems: &S) -> Result<(), RuntimeExit> {
    telemetry::init_tracing(&profile.log_level).map_err(RuntimeExit::from_error)?;
    tracing::debug!(
        target: "galaxy::dispatch",
        mode = %profile.mode,
        "Launch mode selected"
    );
    dispatch(profile.command, subsystems)
        .await
        .map_err(RuntimeExit::from_dispatch)
}

/// Build the configuration for `command` and run exactly one subsystem.
///
/// Configuration is assembled completely before any start routine is
/// invoked, so a rejected proxy token has no side effects.
pub async fn dispatch<S: Subsystems>(
    command: ModeCommand,
    subsystems: &S,
) -> Result<(), DispatchError> {
    match command {
        ModeCommand::Runner(args) => {
            let mode = ModeSelector::Runner.as_str();
            let config = build_runner_config(args);
            telemetry::emit_mode_config(mode, &config);
            subsystems
                .start_runner(config)
                .await
                .map_err(|cause| DispatchError::subsystem(mode, cause))
        }
        ModeCommand::Proxy(args) => {
            let mode = ModeSelector::Proxy.as_str();
            let config = build_proxy_config(args)?;
            telemetry::emit_mode_config(mode, &config);
            subsystems
                .start_proxy(config)
                .await
                .map_err(|cause| DispatchError::subsystem(mode, cause))
        }
        ModeCommand::Server(args) => {
            let mode = ModeSelector::Server.as_str();
            let config = build_server_config(args);
            telemetry::emit_mode_config(mode, &config);
            subsystems
                .start_server(config)
                .await
                .map_err(|cause| DispatchError::subsystem(mode, cause))
        }
    }
}
