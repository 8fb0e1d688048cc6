//! CLI entrypoint module structure.
pub mod args;
pub mod profile;

pub use args::{GalaxyArgs, ModeCommand, ProxyArgs, RunnerArgs, ServerArgs};
pub use profile::{LaunchProfile, ModeSelector};

#[cfg(test)]
pub(crate) use args::test_support;
