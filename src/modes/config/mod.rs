//! Typed configuration values built from resolved launch options.
pub mod auth;
pub mod driver;
pub mod proxy;
pub mod runner;
pub mod server;

pub use auth::{AuthConfig, AuthMode, JwtAlgorithm, DEFAULT_JWT_PROXY_SECRET, DEFAULT_JWT_SECRET};
pub use driver::{DriverConfig, DriverType};
pub use proxy::{build_proxy_config, ProxyConfig, DEFAULT_RUNNER_ADDR};
pub use runner::{build_runner_config, RunnerConfig, DEFAULT_PROXY_PORT, DEFAULT_RUNNER_PORT};
pub use server::{build_server_config, ServerConfig, DEFAULT_SERVER_PORT};
