use serde::Serialize;

use crate::cli::ServerArgs;

pub const DEFAULT_SERVER_PORT: &str = "4050";

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    pub port: String,
}

pub fn build_server_config(args: ServerArgs) -> ServerConfig {
    ServerConfig { port: args.port }
}
