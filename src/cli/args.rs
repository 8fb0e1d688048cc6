//! CLI argument definitions.
//!
//! Every option resolves as default < environment variable < explicit flag.
use std::path::PathBuf;

use clap::{builder::BoolishValueParser, ArgAction, Args, Parser, Subcommand};

use super::ModeSelector;
use crate::{
    lib::log_level::LOG_LEVEL_INFO,
    modes::config::{
        DriverType, JwtAlgorithm, DEFAULT_JWT_PROXY_SECRET, DEFAULT_JWT_SECRET,
        DEFAULT_PROXY_PORT, DEFAULT_RUNNER_ADDR, DEFAULT_RUNNER_PORT, DEFAULT_SERVER_PORT,
    },
};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "galaxy",
    author,
    version,
    about = "Galaxy launcher for runner, proxy and server instances",
    long_about = None,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct GalaxyArgs {
    #[command(subcommand)]
    pub command: ModeCommand,
}

/// Launch modes.
#[derive(Debug, Clone, Subcommand)]
pub enum ModeCommand {
    /// Starts a galaxy runner instance
    Runner(RunnerArgs),
    /// Starts the proxy to collect metrics directly from envoy
    Proxy(ProxyArgs),
    /// Starts the galaxy server instance
    Server(ServerArgs),
}

impl ModeCommand {
    pub fn selector(&self) -> ModeSelector {
        match self {
            ModeCommand::Runner(_) => ModeSelector::Runner,
            ModeCommand::Proxy(_) => ModeSelector::Proxy,
            ModeCommand::Server(_) => ModeSelector::Server,
        }
    }

    /// Raw `log-level` value, before validation.
    pub fn log_level(&self) -> &str {
        match self {
            ModeCommand::Runner(args) => &args.log_level,
            ModeCommand::Proxy(args) => &args.log_level,
            ModeCommand::Server(args) => &args.log_level,
        }
    }
}

/// Arguments for `runner`.
#[derive(Debug, Clone, Args)]
pub struct RunnerArgs {
    /// The port the runner will bind to
    #[arg(long, env = "PORT", default_value = DEFAULT_RUNNER_PORT)]
    pub port: String,
    /// The port the proxy will bind to
    #[arg(long, env = "PROXY_PORT", default_value = DEFAULT_PROXY_PORT)]
    pub proxy_port: String,
    /// Set the log level [debug | info | error]
    #[arg(long, env = "LOG_LEVEL", default_value = LOG_LEVEL_INFO)]
    pub log_level: String,
    /// The jwt algorithm to use for verification and signing
    #[arg(long = "jwt-algo", env = "JWT_ALGO", value_enum, default_value_t = JwtAlgorithm::Hs256)]
    pub jwt_algo: JwtAlgorithm,
    /// The jwt secret to use when the algorithm is set to HS256
    #[arg(long, env = "JWT_SECRET", default_value = DEFAULT_JWT_SECRET, hide_env_values = true)]
    pub jwt_secret: String,
    /// The jwt secret to use for authenticating the proxy
    #[arg(
        long,
        env = "JWT_PROXY_SECRET",
        default_value = DEFAULT_JWT_PROXY_SECRET,
        hide_env_values = true
    )]
    pub jwt_proxy_secret: String,
    /// The driver to use for deployment
    #[arg(long, env = "DRIVER", value_enum, default_value_t = DriverType::Istio)]
    pub driver: DriverType,
    /// Driver config file path
    #[arg(long = "driver-config", env = "DRIVER_CONFIG")]
    pub driver_config: Option<PathBuf>,
    /// Indicates that galaxy is running outside the cluster
    #[arg(
        long,
        env = "OUTSIDE_CLUSTER",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub outside_cluster: bool,
}

/// Arguments for `proxy`.
#[derive(Debug, Clone, Args)]
pub struct ProxyArgs {
    /// Address of the galaxy runner instance
    #[arg(long, env = "ADDR", default_value = DEFAULT_RUNNER_ADDR)]
    pub addr: String,
    /// The token to be used for authentication
    #[arg(long, env = "TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,
    /// Set the log level [debug | info | error]
    #[arg(long, env = "LOG_LEVEL", default_value = LOG_LEVEL_INFO)]
    pub log_level: String,
}

/// Arguments for `server`.
#[derive(Debug, Clone, Args)]
pub struct ServerArgs {
    /// The port the server will bind to
    #[arg(long, env = "PORT", default_value = DEFAULT_SERVER_PORT)]
    pub port: String,
    /// Set the log level [debug | info | error]
    #[arg(long, env = "LOG_LEVEL", default_value = LOG_LEVEL_INFO)]
    pub log_level: String,
}
