//! LaunchProfile and mode selection.
use std::fmt;

use super::{GalaxyArgs, ModeCommand};
use crate::lib::log_level::LogLevelSelection;

/// Operating mode chosen for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelector {
    Runner,
    Proxy,
    Server,
}

impl ModeSelector {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ModeSelector::Runner => "runner",
            ModeSelector::Proxy => "proxy",
            ModeSelector::Server => "server",
        }
    }
}

impl fmt::Display for ModeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved launch profile.
#[derive(Debug, Clone)]
pub struct LaunchProfile {
    pub mode: ModeSelector,
    pub log_level: LogLevelSelection,
    pub command: ModeCommand,
}

impl From<GalaxyArgs> for LaunchProfile {
    fn from(args: GalaxyArgs) -> Self {
        let command = args.command;
        Self {
            mode: command.selector(),
            log_level: LogLevelSelection::resolve(command.log_level()),
            command,
        }
    }
}
