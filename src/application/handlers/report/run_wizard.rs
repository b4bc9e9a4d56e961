//! RunWizardHandler - drives one report-creation session end to end.
//!
//! Sequencing is owned by the wizard state machine: the creation request
//! is produced only on entering `Submitting` and only once, and the
//! first completion probe can never precede the submission.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{ReportId, ValidationError};
use crate::domain::report::{DateRange, ExpoGroup, ReportWizard};
use crate::ports::{ApiError, ReportClient};

use super::poll_report::{PollConfig, PollReportError, PollReportHandler};

/// Successful wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOutcome {
    /// The durable report.
    pub report_id: ReportId,
    /// Route of the durable view the caller should navigate to.
    pub view_path: String,
}

/// Error type for a wizard run.
#[derive(Debug)]
pub enum WizardError {
    /// Range or group input rejected before any request was sent.
    Validation(ValidationError),
    /// Session expired during submission or polling.
    Auth,
    /// Polling deadline elapsed; the job keeps running server-side.
    Timeout,
    /// Submission or polling failed.
    Backend(ApiError),
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::Validation(err) => write!(f, "invalid wizard input: {}", err),
            WizardError::Auth => write!(f, "authentication failed"),
            WizardError::Timeout => write!(f, "report generation timed out"),
            WizardError::Backend(err) => write!(f, "report generation failed: {}", err),
        }
    }
}

impl std::error::Error for WizardError {}

impl From<ValidationError> for WizardError {
    fn from(err: ValidationError) -> Self {
        WizardError::Validation(err)
    }
}

impl From<ApiError> for WizardError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth => WizardError::Auth,
            other => WizardError::Backend(other),
        }
    }
}

impl From<PollReportError> for WizardError {
    fn from(err: PollReportError) -> Self {
        match err {
            PollReportError::Auth => WizardError::Auth,
            PollReportError::Timeout { .. } => WizardError::Timeout,
            PollReportError::Backend(err) => WizardError::Backend(err),
        }
    }
}

/// Handler running the full wizard: submit, poll, finish.
pub struct RunWizardHandler {
    client: Arc<dyn ReportClient>,
    poll_config: PollConfig,
}

impl RunWizardHandler {
    pub fn new(client: Arc<dyn ReportClient>, poll_config: PollConfig) -> Self {
        Self {
            client,
            poll_config,
        }
    }

    pub async fn handle(
        &self,
        range: DateRange,
        groups: Vec<ExpoGroup>,
    ) -> Result<WizardOutcome, WizardError> {
        let mut wizard = ReportWizard::new();
        wizard.set_range(range)?;
        wizard.advance()?;
        for group in groups {
            wizard.add_group(group)?;
        }
        wizard.advance()?;

        let request = wizard.take_request()?;
        let shell = self.client.create_report(&request).await?;
        wizard.mark_submitted(shell.id)?;
        info!(report_id = %shell.id, "report submitted, polling for completion");

        let poller = PollReportHandler::new(Arc::clone(&self.client), self.poll_config.clone());
        let report_id = poller.handle(shell.id).await?;

        let view_path = wizard.complete()?;
        Ok(WizardOutcome {
            report_id,
            view_path,
        })
    }
}
