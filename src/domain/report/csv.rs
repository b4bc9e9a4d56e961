//! CSV export for a finished availability report.
//!
//! Semicolon-delimited (matching the annual quality export). Column
//! layout: group name, one availability column per week of the span,
//! then the overall availability. Availability is `100 − taux`, written
//! with raw numeric formatting; rounding is a display concern.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::model::{availability, AvailabilityReport, WeeklyRate};

/// Renders a finished report to CSV.
///
/// Pure: identical input yields byte-identical output. Fails with
/// `ReportPending` if the backend job has not finished (`taux` null).
pub fn report_to_csv(report: &AvailabilityReport) -> Result<String, DomainError> {
    let overall = report.rate.ok_or_else(|| {
        DomainError::new(ErrorCode::ReportPending, "report is still being computed")
            .with_detail("report_id", report.id.to_string())
    })?;

    let week_count = report
        .groups
        .iter()
        .map(|g| g.weekly.len())
        .chain(std::iter::once(report.weekly.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::from("Groupe");
    for week in 1..=week_count {
        out.push_str(&format!(";Semaine {}", week));
    }
    out.push_str(";Disponibilité\n");

    push_row(
        &mut out,
        "Ensemble des expositions",
        &report.weekly,
        Some(overall),
        week_count,
    );
    for group in &report.groups {
        push_row(&mut out, &group.name, &group.weekly, group.rate, week_count);
    }

    Ok(out)
}

fn push_row(
    out: &mut String,
    name: &str,
    weekly: &[WeeklyRate],
    rate: Option<f64>,
    week_count: usize,
) {
    // Embedded quotes are doubled, per the quoted-field convention.
    out.push('"');
    out.push_str(&name.replace('"', "\"\""));
    out.push('"');
    for week in 1..=week_count as u32 {
        out.push(';');
        if let Some(entry) = weekly.iter().find(|w| w.week == week) {
            out.push_str(&format!("{}", availability(entry.rate)));
        }
    }
    out.push(';');
    if let Some(rate) = rate {
        out.push_str(&format!("{}", availability(rate)));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReportId;
    use crate::domain::report::model::ExpoGroupResult;
    use chrono::NaiveDate;

    fn ready_report() -> AvailabilityReport {
        AvailabilityReport {
            id: ReportId::new(3),
            start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2023, 1, 14).unwrap(),
            rate: Some(2.5),
            weekly: vec![
                WeeklyRate { week: 1, rate: 5.0 },
                WeeklyRate { week: 2, rate: 0.0 },
            ],
            groups: vec![ExpoGroupResult {
                name: "Galerie des enfants".to_string(),
                rate: Some(10.0),
                weekly: vec![
                    WeeklyRate { week: 1, rate: 20.0 },
                    WeeklyRate { week: 2, rate: 0.0 },
                ],
            }],
        }
    }

    #[test]
    fn csv_lists_weeks_then_overall_availability() {
        let csv = report_to_csv(&ready_report()).unwrap();
        assert_eq!(
            csv,
            "Groupe;Semaine 1;Semaine 2;Disponibilité\n\
             \"Ensemble des expositions\";95;100;97.5\n\
             \"Galerie des enfants\";80;100;90\n"
        );
    }

    #[test]
    fn pending_report_is_rejected() {
        let mut report = ready_report();
        report.rate = None;
        let err = report_to_csv(&report).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportPending);
    }

    #[test]
    fn missing_week_leaves_cell_empty() {
        let mut report = ready_report();
        report.groups[0].weekly.remove(1);
        let csv = report_to_csv(&report).unwrap();
        assert!(csv.contains("\"Galerie des enfants\";80;;90\n"));
    }

    #[test]
    fn quote_in_group_name_is_doubled() {
        let mut report = ready_report();
        report.groups[0].name = "Galerie \"Humboldt\"".to_string();
        let csv = report_to_csv(&report).unwrap();
        assert!(csv.contains("\"Galerie \"\"Humboldt\"\"\";80;100;90\n"));
    }

    #[test]
    fn export_is_deterministic() {
        let report = ready_report();
        assert_eq!(
            report_to_csv(&report).unwrap(),
            report_to_csv(&report).unwrap()
        );
    }
}
