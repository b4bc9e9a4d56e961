//! PollReportHandler - observes completion of an asynchronous report job.
//!
//! The backend computes a report in the background; the client learns of
//! completion by probing `GET /rapports/id/{id}/done`. The historical
//! client polled on a fixed 1-second cadence forever; this handler keeps
//! that cadence as the default but supports capped exponential backoff
//! and an overall deadline. Dropping the returned future cancels the
//! loop, so at most one loop runs per handler call.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::domain::foundation::ReportId;
use crate::ports::{ApiError, ReportClient};

/// Polling cadence and failure policy.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between completion probes.
    ///
    /// Default: 1 second (historical cadence).
    pub initial_interval: Duration,

    /// Multiplier applied to the interval after each probe.
    ///
    /// Default: 1.0 (fixed cadence).
    pub backoff_factor: f64,

    /// Ceiling for the backed-off interval.
    ///
    /// Default: 30 seconds.
    pub max_interval: Duration,

    /// Overall deadline; `None` polls until completion.
    ///
    /// Default: None.
    pub max_duration: Option<Duration>,

    /// Whether a failed probe counts as a "not done" tick.
    ///
    /// The historical client swallowed transport and server errors into
    /// the polling loop; set to `false` to surface them instead. Auth
    /// failures and a 404 on the report id abort regardless.
    /// Default: true.
    pub treat_errors_as_pending: bool,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(1000),
            backoff_factor: 1.0,
            max_interval: Duration::from_secs(30),
            max_duration: None,
            treat_errors_as_pending: true,
        }
    }
}

impl PollConfig {
    /// Sets the probe interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.initial_interval = interval;
        self
    }

    /// Enables exponential backoff with the given factor.
    pub fn with_backoff(mut self, factor: f64, max_interval: Duration) -> Self {
        self.backoff_factor = factor;
        self.max_interval = max_interval;
        self
    }

    /// Sets an overall deadline after which polling surfaces `Timeout`.
    pub fn with_max_duration(mut self, max: Duration) -> Self {
        self.max_duration = Some(max);
        self
    }

    /// Controls whether retryable probe failures keep the loop alive.
    pub fn with_errors_as_pending(mut self, pending: bool) -> Self {
        self.treat_errors_as_pending = pending;
        self
    }
}

/// Error type for the polling loop.
#[derive(Debug, Clone)]
pub enum PollReportError {
    /// Session expired; polling aborts immediately, no retry.
    Auth,
    /// Deadline elapsed before the backend finished.
    Timeout { waited: Duration },
    /// Probe failed in a way the policy does not swallow.
    Backend(ApiError),
}

impl std::fmt::Display for PollReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollReportError::Auth => write!(f, "authentication failed during polling"),
            PollReportError::Timeout { waited } => {
                write!(f, "report not ready after {:?}", waited)
            }
            PollReportError::Backend(err) => write!(f, "polling failed: {}", err),
        }
    }
}

impl std::error::Error for PollReportError {}

/// Handler polling a report job until the backend signals completion.
pub struct PollReportHandler {
    client: Arc<dyn ReportClient>,
    config: PollConfig,
}

impl PollReportHandler {
    pub fn new(client: Arc<dyn ReportClient>, config: PollConfig) -> Self {
        Self { client, config }
    }

    /// Polls until `done == true`, then returns the report id.
    ///
    /// Probes immediately, then sleeps between ticks; with a backend
    /// answering `false` for `k` ticks then `true`, exactly `k + 1`
    /// requests are issued.
    pub async fn handle(&self, report_id: ReportId) -> Result<ReportId, PollReportError> {
        let started = Instant::now();
        let mut interval = self.config.initial_interval;

        loop {
            match self.client.is_done(report_id).await {
                Ok(true) => {
                    debug!(%report_id, elapsed = ?started.elapsed(), "report ready");
                    return Ok(report_id);
                }
                Ok(false) => {
                    debug!(%report_id, "report still computing");
                }
                Err(ApiError::Auth) => return Err(PollReportError::Auth),
                // A 404 means the report id itself is gone; waiting
                // longer cannot fix that.
                Err(err @ ApiError::NotFound { .. }) => {
                    return Err(PollReportError::Backend(err))
                }
                Err(err) if self.config.treat_errors_as_pending => {
                    warn!(%report_id, %err, "probe failed, treating as pending");
                }
                Err(err) => return Err(PollReportError::Backend(err)),
            }

            if let Some(max) = self.config.max_duration {
                if started.elapsed() + interval > max {
                    return Err(PollReportError::Timeout {
                        waited: started.elapsed(),
                    });
                }
            }

            sleep(interval).await;
            interval = next_interval(interval, &self.config);
        }
    }
}

fn next_interval(current: Duration, config: &PollConfig) -> Duration {
    let scaled = current.mul_f64(config.backoff_factor.max(1.0));
    scaled.min(config.max_interval)
}
