use serde::Serialize;

use super::{AuthConfig, DriverConfig};
use crate::cli::RunnerArgs;

pub const DEFAULT_RUNNER_PORT: &str = "4050";
pub const DEFAULT_PROXY_PORT: &str = "4055";

/// Runner settings. Ownership passes to the runner on start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerConfig {
    pub port: String,
    pub proxy_port: String,
    pub auth: AuthConfig,
    pub driver: DriverConfig,
}

/// Map resolved runner options into a [`RunnerConfig`].
pub fn build_runner_config(args: RunnerArgs) -> RunnerConfig {
    RunnerConfig {
        port: args.port,
        proxy_port: args.proxy_port,
        auth: AuthConfig::runner(args.jwt_algo, args.jwt_secret, args.jwt_proxy_secret),
        driver: DriverConfig::new(args.driver, args.driver_config, args.outside_cluster),
    }
}
