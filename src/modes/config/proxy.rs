use std::fmt;

use serde::Serialize;

use crate::{
    cli::ProxyArgs,
    lib::{errors::DispatchError, token::validate_token_format},
};

pub const DEFAULT_RUNNER_ADDR: &str = "runner.galaxy.svc.cluster.local:4050";

/// Proxy settings: the runner to report to and the token to present.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ProxyConfig {
    pub address: String,
    #[serde(skip_serializing)]
    pub token: String,
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("address", &self.address)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Map resolved proxy options into a [`ProxyConfig`].
///
/// Fails with [`DispatchError::InvalidToken`] unless the token has three
/// dot-separated segments. An empty token is rejected as well.
pub fn build_proxy_config(args: ProxyArgs) -> Result<ProxyConfig, DispatchError> {
    if !validate_token_format(&args.token) {
        return Err(DispatchError::InvalidToken);
    }

    Ok(ProxyConfig {
        address: args.addr,
        token: args.token,
    })
}
