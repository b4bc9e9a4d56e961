//! CSV exports for the quality module.
//!
//! Two historical delimiter conventions coexist and are both preserved:
//! the annual cycle export is semicolon-delimited, the monthly thematic
//! export is comma-delimited and unquoted.

use super::cycle::QualityCycle;

/// One scored thematique row of the monthly export.
#[derive(Debug, Clone, PartialEq)]
pub struct ThematicScore {
    pub label: String,
    pub note: f64,
}

/// Annual cycle export: `Mois;Note qualité`, one row per month of the
/// dense series, zero-padded months included.
pub fn cycle_to_csv(cycle: &QualityCycle) -> String {
    let mut out = String::from("Mois;Note qualité\n");
    for (label, value) in cycle.month_labels().iter().zip(cycle.dense_series()) {
        out.push_str(label);
        out.push(';');
        out.push_str(&format!("{}", value));
        out.push('\n');
    }
    out
}

/// Monthly thematic export: `Thématique,Note qualité`, comma-delimited.
pub fn thematic_to_csv(scores: &[ThematicScore]) -> String {
    let mut out = String::from("Thématique,Note qualité\n");
    for score in scores {
        out.push_str(&score.label);
        out.push(',');
        out.push_str(&format!("{}", score.note));
        out.push('\n');
    }
    out
}
