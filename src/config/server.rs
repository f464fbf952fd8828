//! Listener and runtime settings for the gateway binary

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Longest request timeout the HTTP layer accepts, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where and how the HTTP API is served.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind (an IP literal, not a hostname).
    pub host: IpAddr,

    pub port: u16,

    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Per-request timeout applied by the router.
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call the API. CORS stays
    /// off when unset.
    pub cors_allowed_origins: Option<String>,
}

/// Deployment the gateway runs in.
///
/// Production switches logs to JSON and refuses Razorpay test keys.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured CORS origins, trimmed, blanks skipped.
    pub fn cors_allowed_origins(&self) -> impl Iterator<Item = &str> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,payment_gateway=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_allowed_origins: None,
        }
    }
}
