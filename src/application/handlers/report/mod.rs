//! Report workflow handlers.

mod poll_report;
mod run_wizard;

pub use poll_report::{PollConfig, PollReportError, PollReportHandler};
pub use run_wizard::{RunWizardHandler, WizardError, WizardOutcome};
