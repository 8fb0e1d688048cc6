use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

pub const DEFAULT_JWT_SECRET: &str = "some-secret";
pub const DEFAULT_JWT_PROXY_SECRET: &str = "some-proxy-secret";

/// Which side of the runner/proxy link the authenticator serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Runner,
    Proxy,
}

/// JWT algorithm used for signing and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum JwtAlgorithm {
    #[serde(rename = "HS256")]
    #[value(name = "hs256")]
    Hs256,
    #[serde(rename = "RS256")]
    #[value(name = "rs256", alias = "rsa256")]
    Rs256,
}

impl JwtAlgorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            JwtAlgorithm::Hs256 => "HS256",
            JwtAlgorithm::Rs256 => "RS256",
        }
    }
}

/// Authentication settings handed to the runner.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub jwt_algorithm: JwtAlgorithm,
    #[serde(skip_serializing)]
    pub secret: String,
    #[serde(skip_serializing)]
    pub proxy_secret: String,
}

impl AuthConfig {
    /// Runner-side authentication; the mode is always [`AuthMode::Runner`].
    pub fn runner(jwt_algorithm: JwtAlgorithm, secret: String, proxy_secret: String) -> Self {
        Self {
            mode: AuthMode::Runner,
            jwt_algorithm,
            secret,
            proxy_secret,
        }
    }

    /// Signing secret, only meaningful for HS256.
    pub fn hs256_secret(&self) -> Option<&str> {
        match self.jwt_algorithm {
            JwtAlgorithm::Hs256 => Some(self.secret.as_str()),
            JwtAlgorithm::Rs256 => None,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("mode", &self.mode)
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("secret", &"<redacted>")
            .field("proxy_secret", &"<redacted>")
            .finish()
    }
}
