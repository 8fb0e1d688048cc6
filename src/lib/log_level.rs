//! Process log level selection from the `log-level` option.
use std::fmt;

use tracing::{error, info, level_filters::LevelFilter};

pub const LOG_LEVEL_DEBUG: &str = "debug";
pub const LOG_LEVEL_INFO: &str = "info";
pub const LOG_LEVEL_ERROR: &str = "error";

/// Severity threshold applied to every log line of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    /// Exact, case-sensitive match against `debug`, `info` and `error`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            LOG_LEVEL_DEBUG => Some(Self::Debug),
            LOG_LEVEL_INFO => Some(Self::Info),
            LOG_LEVEL_ERROR => Some(Self::Error),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => LOG_LEVEL_DEBUG,
            Self::Info => LOG_LEVEL_INFO,
            Self::Error => LOG_LEVEL_ERROR,
        }
    }

    pub const fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving the raw `log-level` value.
///
/// Unknown values fall back to [`LogLevel::Info`] and are kept in `rejected`
/// so the fallback can be reported once logging is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLevelSelection {
    pub level: LogLevel,
    pub rejected: Option<String>,
}

impl LogLevelSelection {
    pub fn resolve(raw: &str) -> Self {
        match LogLevel::parse(raw) {
            Some(level) => Self {
                level,
                rejected: None,
            },
            None => Self {
                level: LogLevel::Info,
                rejected: Some(raw.to_string()),
            },
        }
    }

    /// Emit the fallback notice for a rejected value. No-op otherwise.
    pub fn report_rejected(&self) {
        if let Some(raw) = &self.rejected {
            error!(target: "galaxy::log", "Invalid log level ({raw}) provided");
            info!(target: "galaxy::log", "Defaulting to `info` level");
        }
    }
}
