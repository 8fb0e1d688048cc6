use thiserror::Error;

/// Exit status used when configuration is rejected before any subsystem starts.
pub const CONFIG_ERROR_EXIT_CODE: u8 = 2;
/// Exit status used when a subsystem fails to start or stops with an error.
pub const SUBSYSTEM_ERROR_EXIT_CODE: u8 = 1;

/// Errors surfaced while dispatching a launch mode.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The proxy token does not have the `header.payload.signature` shape.
    #[error("invalid token provided")]
    InvalidToken,
    /// The selected subsystem returned an error from its start routine.
    #[error("failed to start {mode}: {cause:#}")]
    SubsystemStart {
        mode: &'static str,
        #[source]
        cause: anyhow::Error,
    },
}

impl DispatchError {
    /// Helper to wrap a subsystem failure with the mode that produced it.
    pub fn subsystem(mode: &'static str, cause: anyhow::Error) -> Self {
        Self::SubsystemStart { mode, cause }
    }

    /// Returns `true` for failures detected before any subsystem side effect.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidToken)
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_configuration_error() {
            CONFIG_ERROR_EXIT_CODE
        } else {
            SUBSYSTEM_ERROR_EXIT_CODE
        }
    }
}
