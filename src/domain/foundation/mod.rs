//! Foundation types shared across subsystems.
//!
//! Value objects (ids, quality notes), calendar helpers, and the
//! shared error types used throughout the domain layer.

mod dates;
mod errors;
mod ids;
mod note;

pub use dates::{add_months, add_months_to_date, french_month_label, months_between};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    CycleId, ExpositionId, HistoryEntryId, ReportId, TaskId, ThematiqueId, UserId,
};
pub use note::QualityNote;
