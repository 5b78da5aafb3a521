//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `IDEATION_FACILITATOR` prefix and nested values use double underscores as
//! separators. Every value has a default, so an empty environment is valid.
//!
//! # Example
//!
//! ```no_run
//! use ideation_facilitator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod facilitation;
mod server;

pub use error::{ConfigError, ValidationError};
pub use facilitation::{FacilitationConfig, MAX_STIMULUS_ALTERNATIVES};
pub use server::{Environment, LogFormat, ServerConfig, MAX_REQUEST_TIMEOUT_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener configuration (bind address, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Facilitation defaults (participants, stimulus words)
    #[serde(default)]
    pub facilitation: FacilitationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `IDEATION_FACILITATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `IDEATION_FACILITATOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `IDEATION_FACILITATOR__SERVER__BIND=127.0.0.1` -> `server.bind` (IP literal only)
    /// - `IDEATION_FACILITATOR__FACILITATION__DEFAULT_PARTICIPANT=facilitator`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("IDEATION_FACILITATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.facilitation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
