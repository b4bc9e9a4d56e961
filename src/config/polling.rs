//! Report polling configuration

use serde::Deserialize;
use std::time::Duration;

use crate::application::PollConfig;

use super::error::ValidationError;

/// Polling cadence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Delay between completion probes, in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Multiplier applied to the interval after each probe
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    /// Ceiling for the backed-off interval, in milliseconds
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,

    /// Overall deadline in seconds; absent means poll until completion
    pub max_duration_secs: Option<u64>,

    /// Whether a retryable probe failure counts as a "not done" tick
    #[serde(default = "default_errors_as_pending")]
    pub treat_errors_as_pending: bool,
}

impl PollingConfig {
    /// Validate polling configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_ms == 0 {
            return Err(ValidationError::InvalidPollInterval);
        }
        if self.backoff_factor < 1.0 {
            return Err(ValidationError::InvalidBackoffFactor);
        }
        Ok(())
    }

    /// Build the poll policy the report handlers consume
    pub fn to_poll_config(&self) -> PollConfig {
        let mut config = PollConfig::default()
            .with_interval(Duration::from_millis(self.interval_ms))
            .with_backoff(
                self.backoff_factor,
                Duration::from_millis(self.max_interval_ms),
            )
            .with_errors_as_pending(self.treat_errors_as_pending);
        if let Some(secs) = self.max_duration_secs {
            config = config.with_max_duration(Duration::from_secs(secs));
        }
        config
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            backoff_factor: default_backoff_factor(),
            max_interval_ms: default_max_interval_ms(),
            max_duration_secs: None,
            treat_errors_as_pending: default_errors_as_pending(),
        }
    }
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_backoff_factor() -> f64 {
    1.0
}

fn default_max_interval_ms() -> u64 {
    30_000
}

fn default_errors_as_pending() -> bool {
    true
}
