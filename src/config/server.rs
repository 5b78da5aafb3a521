//! HTTP listener settings for the facilitation API.
//!
//! Every facilitation call completes in memory, so request timeouts are kept
//! short and capped at [`MAX_REQUEST_TIMEOUT_SECS`].

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Longest request timeout accepted by [`ServerConfig::validate`].
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Listener, logging and CORS settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// IP address the API binds to
    #[serde(default = "default_bind")]
    pub bind: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins; unset allows any origin
    pub allowed_origins: Option<String>,
}

/// Deployment environment. Selects the log output format.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// How log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn log_format(&self) -> LogFormat {
        match self.environment {
            Environment::Production => LogFormat::Json,
            Environment::Development => LogFormat::Pretty,
        }
    }

    /// Configured origins with blanks dropped. Empty means any origin.
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout {
                max: MAX_REQUEST_TIMEOUT_SECS,
            });
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            environment: Environment::default(),
            log_filter: default_log_filter(),
            request_timeout_secs: default_request_timeout_secs(),
            allowed_origins: None,
        }
    }
}

fn default_bind() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    5000
}

fn default_log_filter() -> String {
    "info,ideation_facilitator=debug,tower_http=info".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}
