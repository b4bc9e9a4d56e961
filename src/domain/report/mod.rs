//! Availability-ratio report domain.
//!
//! A report is requested for a date range and a set of exposition
//! groupings, computed asynchronously by the backend, and observed by
//! polling until its `taux` field turns non-null.

mod csv;
mod model;
mod wizard;

pub use csv::report_to_csv;
pub use model::{
    AvailabilityReport, DateRange, ExpoGroup, ExpoGroupPost, ExpoGroupResult, ExpositionPost,
    ExpositionRef, ReportRequest, WeeklyRate,
};
pub use wizard::{ReportWizard, WizardState};
