//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `GEMEX` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gemex_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.api.base_url);
//! ```

mod api;
mod error;
mod polling;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};
pub use polling::PollingConfig;

use serde::Deserialize;

use crate::adapters::rest::RestConfig;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration (base URL, token, timeout)
    pub api: ApiConfig,

    /// Report polling cadence and failure policy
    #[serde(default)]
    pub polling: PollingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `GEMEX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GEMEX__API__BASE_URL=https://...` -> `api.base_url = ...`
    /// - `GEMEX__POLLING__INTERVAL_MS=500` -> `polling.interval_ms = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("GEMEX").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        self.polling.validate()?;
        Ok(())
    }

    /// Build the REST client configuration
    pub fn rest_config(&self) -> RestConfig {
        RestConfig::new(self.api.base_url.clone(), self.api.token.clone())
            .with_timeout(self.api.timeout())
    }
}
