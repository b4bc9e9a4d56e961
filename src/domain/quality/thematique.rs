//! Thematic evaluations and their due predicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{add_months, QualityNote, ThematiqueId};

/// An evaluation theme scored periodically within the quality module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thematique {
    pub id: ThematiqueId,
    #[serde(rename = "nom")]
    pub name: String,
    /// Evaluation interval in calendar months.
    #[serde(rename = "periodicite")]
    pub periodicity_months: u32,
}

/// One scored (or pending) evaluation of a thematique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematiqueEvaluation {
    pub id: i64,
    pub thematique_id: ThematiqueId,
    #[serde(default)]
    pub note: Option<QualityNote>,
    /// Scheduled hand-in date.
    #[serde(rename = "date_rendu")]
    pub due_date: DateTime<Utc>,
    /// Actual hand-in date, when the evaluation was delivered.
    #[serde(rename = "date_rendu_reelle", default)]
    pub handed_in: Option<DateTime<Utc>>,
}

impl ThematiqueEvaluation {
    /// The date used for recurrence: actual hand-in when present,
    /// scheduled date otherwise.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.handed_in.unwrap_or(self.due_date)
    }
}

/// Whether a thematique should be evaluated now.
///
/// True when it has never been evaluated, or when its periodicity has
/// elapsed since the latest effective evaluation date.
pub fn should_evaluate(
    thematique: &Thematique,
    evaluations: &[ThematiqueEvaluation],
    now: DateTime<Utc>,
) -> bool {
    let latest = evaluations
        .iter()
        .filter(|e| e.thematique_id == thematique.id)
        .map(ThematiqueEvaluation::effective_date)
        .max();
    match latest {
        None => true,
        Some(date) => now >= add_months(date, thematique.periodicity_months),
    }
}

/// Filters the thematiques due for evaluation, preserving input order.
pub fn due_thematiques<'a>(
    thematiques: &'a [Thematique],
    evaluations: &[ThematiqueEvaluation],
    now: DateTime<Utc>,
) -> Vec<&'a Thematique> {
    thematiques
        .iter()
        .filter(|t| should_evaluate(t, evaluations, now))
        .collect()
}
