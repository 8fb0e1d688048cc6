use std::future::Future;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

use crate::modes::config::{ProxyConfig, RunnerConfig, ServerConfig};

/// Start routines of the runner, proxy and server subsystems.
///
/// Each call owns the process's serving lifetime and resolves only on
/// shutdown or a fatal error.
pub trait Subsystems {
    fn start_runner(&self, config: RunnerConfig) -> impl Future<Output = Result<()>> + Send;
    fn start_proxy(&self, config: ProxyConfig) -> impl Future<Output = Result<()>> + Send;
    fn start_server(&self, config: ServerConfig) -> impl Future<Output = Result<()>> + Send;
}

/// Subsystem host used by the `galaxy` binary.
///
/// Announces the instance and holds the process until Ctrl-C.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandaloneSubsystems;

impl Subsystems for StandaloneSubsystems {
    async fn start_runner(&self, config: RunnerConfig) -> Result<()> {
        info!(
            target: "galaxy::runner",
            port = %config.port,
            proxy_port = %config.proxy_port,
            jwt_algorithm = config.auth.jwt_algorithm.as_str(),
            driver = config.driver.driver_type.as_str(),
            in_cluster = config.driver.is_in_cluster,
            "Starting galaxy runner"
        );
        wait_for_shutdown("runner").await
    }

    async fn start_proxy(&self, config: ProxyConfig) -> Result<()> {
        info!(
            target: "galaxy::proxy",
            runner_addr = %config.address,
            "Starting galaxy proxy"
        );
        wait_for_shutdown("proxy").await
    }

    async fn start_server(&self, config: ServerConfig) -> Result<()> {
        info!(
            target: "galaxy::server",
            port = %config.port,
            "Starting galaxy server"
        );
        wait_for_shutdown("server").await
    }
}

async fn wait_for_shutdown(subsystem: &'static str) -> Result<()> {
    signal::ctrl_c()
        .await
        .with_context(|| format!("failed to listen for shutdown signal ({subsystem})"))?;
    info!(
        target: "galaxy::runtime",
        subsystem,
        "Shutdown signal received"
    );
    Ok(())
}
