//! Report data model.
//!
//! Field names follow the crate's English conventions; serde renames map
//! them onto the backend's French wire format (`date_debut`, `taux`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExpositionId, ReportId, ValidationError};

/// Inclusive calendar date range for a report.
///
/// ISO calendar dates only; the submission truncates any time component
/// to the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "date_debut")]
    pub start: NaiveDate,
    #[serde(rename = "date_fin")]
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn try_new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::invalid_format(
                "date_range",
                format!("start {} is after end {}", start, end),
            ));
        }
        Ok(Self { start, end })
    }
}

/// An exposition as referenced while building groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpositionRef {
    pub id: ExpositionId,
    #[serde(rename = "nom")]
    pub name: String,
}

/// A named grouping of expositions, edited during the wizard session.
///
/// `members` may be empty; such a group is tolerated and produces a
/// degenerate report group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpoGroup {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "expositions")]
    pub members: Vec<ExpositionRef>,
}

impl ExpoGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Projects to the id-only POST shape; exposition names are dropped.
    pub fn to_post(&self) -> ExpoGroupPost {
        ExpoGroupPost {
            name: self.name.clone(),
            expositions: self
                .members
                .iter()
                .map(|m| ExpositionPost { exposition_id: m.id })
                .collect(),
        }
    }
}

/// Id-only group shape sent in the creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpoGroupPost {
    #[serde(rename = "nom")]
    pub name: String,
    pub expositions: Vec<ExpositionPost>,
}

/// Single member of an [`ExpoGroupPost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpositionPost {
    pub exposition_id: ExpositionId,
}

/// Body of `POST /rapports/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "date_debut")]
    pub start: NaiveDate,
    #[serde(rename = "date_fin")]
    pub end: NaiveDate,
    #[serde(rename = "groupes_expositions")]
    pub groups: Vec<ExpoGroupPost>,
}

impl ReportRequest {
    /// Builds the request from wizard state.
    pub fn new(range: DateRange, groups: &[ExpoGroup]) -> Self {
        Self {
            start: range.start,
            end: range.end,
            groups: groups.iter().map(ExpoGroup::to_post).collect(),
        }
    }
}

/// Downtime percentage for one week of the report span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRate {
    #[serde(rename = "semaine")]
    pub week: u32,
    #[serde(rename = "taux")]
    pub rate: f64,
}

/// Per-group result rows of a finished report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpoGroupResult {
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "taux")]
    pub rate: Option<f64>,
    #[serde(rename = "taux_semaine", default)]
    pub weekly: Vec<WeeklyRate>,
}

/// An availability report as returned by the backend.
///
/// `rate == None` means the backend job is still computing; this is the
/// sentinel the polling loop watches. Once non-null the report is
/// immutable and fetchable by id indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    pub id: ReportId,
    #[serde(rename = "date_debut")]
    pub start: NaiveDate,
    #[serde(rename = "date_fin")]
    pub end: NaiveDate,
    #[serde(rename = "taux")]
    pub rate: Option<f64>,
    #[serde(rename = "taux_semaine", default)]
    pub weekly: Vec<WeeklyRate>,
    #[serde(rename = "groupes_expositions", default)]
    pub groups: Vec<ExpoGroupResult>,
}

impl AvailabilityReport {
    /// True once the backend job has finished.
    pub fn is_ready(&self) -> bool {
        self.rate.is_some()
    }

    /// Durable view route for a finished report.
    pub fn view_path(&self) -> String {
        format!("/availability-ratio-reports/view/{}", self.id)
    }
}

/// Availability shown to users: `100 − taux`, `taux` being downtime.
pub(crate) fn availability(rate: f64) -> f64 {
    100.0 - rate
}
