//! Quality cycle model and dense-series synthesis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    add_months_to_date, french_month_label, months_between, CycleId, QualityNote,
};

/// One month slot within a cycle.
///
/// `month` is the 1-based offset from the cycle start. `note` is absent
/// until the month has been evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthSlot {
    pub id: i64,
    #[serde(rename = "mois")]
    pub month: u32,
    #[serde(default)]
    pub note: Option<QualityNote>,
}

/// A quality-evaluation cycle.
///
/// `slots` mirrors the backend's `mois_cycle`: sparse (typically only up
/// to the current month), not guaranteed sorted or contiguous. All
/// derivations here scatter by the slot's `month` ordinal, never by
/// array position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityCycle {
    pub id: CycleId,
    #[serde(rename = "date_debut")]
    pub start: NaiveDate,
    #[serde(rename = "date_fin")]
    pub end: NaiveDate,
    #[serde(rename = "mois_cycle", default)]
    pub slots: Vec<MonthSlot>,
}

impl QualityCycle {
    /// Number of month slots the cycle spans, both endpoints inclusive.
    pub fn month_count(&self) -> usize {
        (months_between(self.start, self.end) + 1).max(0) as usize
    }

    /// Capitalized French month+year labels, one per slot, starting at
    /// the cycle start. Deterministic: no dependency on "now".
    pub fn month_labels(&self) -> Vec<String> {
        (0..self.month_count())
            .map(|i| french_month_label(add_months_to_date(self.start, i as u32)))
            .collect()
    }

    /// Dense numeric series of length [`month_count`](Self::month_count).
    ///
    /// Index `i` holds the note of the slot with `month == i + 1`, else
    /// `0`. A month not yet evaluated is indistinguishable from one
    /// scored zero; callers that need the distinction should also look
    /// at [`evaluated_count`](Self::evaluated_count).
    pub fn dense_series(&self) -> Vec<f64> {
        let mut series = vec![0.0; self.month_count()];
        for slot in &self.slots {
            if slot.month >= 1 && (slot.month as usize) <= series.len() {
                if let Some(note) = slot.note {
                    series[slot.month as usize - 1] = note.value();
                }
            }
        }
        series
    }

    /// Number of slots carrying a note.
    pub fn evaluated_count(&self) -> usize {
        self.slots.iter().filter(|s| s.note.is_some()).count()
    }

    /// The slot with the highest month ordinal, regardless of insertion
    /// order. `None` for a cycle with no materialized slots.
    pub fn latest_month(&self) -> Option<&MonthSlot> {
        self.slots.iter().max_by_key(|s| s.month)
    }
}

/// Arithmetic mean over a dense series, padded zeros included.
///
/// Unevaluated months therefore pull the figure down; this matches the
/// historical behavior callers depend on.
pub fn average(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn note(value: f64) -> Option<QualityNote> {
        Some(QualityNote::try_new(value).unwrap())
    }

    fn quarter_cycle() -> QualityCycle {
        QualityCycle {
            id: CycleId::new(1),
            start: date(2023, 1, 1),
            end: date(2023, 3, 1),
            slots: vec![
                MonthSlot { id: 10, month: 1, note: note(12.0) },
                MonthSlot { id: 11, month: 2, note: note(18.0) },
            ],
        }
    }

    #[test]
    fn month_count_is_endpoint_inclusive() {
        assert_eq!(quarter_cycle().month_count(), 3);

        let year = QualityCycle {
            id: CycleId::new(2),
            start: date(2023, 9, 1),
            end: date(2024, 8, 1),
            slots: vec![],
        };
        assert_eq!(year.month_count(), 12);
    }

    #[test]
    fn labels_start_at_cycle_start() {
        assert_eq!(
            quarter_cycle().month_labels(),
            vec!["Janvier 2023", "Février 2023", "Mars 2023"]
        );
    }

    #[test]
    fn dense_series_pads_missing_months_with_zero() {
        assert_eq!(quarter_cycle().dense_series(), vec![12.0, 18.0, 0.0]);
    }

    #[test]
    fn dense_series_scatters_by_month_not_position() {
        let mut cycle = quarter_cycle();
        // Unordered, non-contiguous slot list.
        cycle.slots = vec![
            MonthSlot { id: 12, month: 3, note: note(15.0) },
            MonthSlot { id: 10, month: 1, note: note(12.0) },
        ];
        assert_eq!(cycle.dense_series(), vec![12.0, 0.0, 15.0]);
    }

    #[test]
    fn dense_series_ignores_out_of_range_slots() {
        let mut cycle = quarter_cycle();
        cycle.slots.push(MonthSlot { id: 13, month: 9, note: note(20.0) });
        cycle.slots.push(MonthSlot { id: 14, month: 0, note: note(20.0) });
        assert_eq!(cycle.dense_series(), vec![12.0, 18.0, 0.0]);
    }

    #[test]
    fn average_includes_padded_zeros() {
        assert_eq!(average(&quarter_cycle().dense_series()), 10.0);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn latest_month_is_by_ordinal_not_insertion() {
        let mut cycle = quarter_cycle();
        cycle.slots = vec![
            MonthSlot { id: 11, month: 2, note: note(18.0) },
            MonthSlot { id: 10, month: 1, note: note(12.0) },
        ];
        assert_eq!(cycle.latest_month().unwrap().month, 2);

        cycle.slots.clear();
        assert!(cycle.latest_month().is_none());
    }

    #[test]
    fn evaluated_count_skips_empty_slots() {
        let mut cycle = quarter_cycle();
        cycle.slots.push(MonthSlot { id: 12, month: 3, note: None });
        assert_eq!(cycle.evaluated_count(), 2);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_slot() -> impl Strategy<Value = MonthSlot> {
        (0i64..1000, 0u32..30, proptest::option::of(0.0f64..=20.0)).prop_map(
            |(id, month, value)| MonthSlot {
                id,
                month,
                note: value.map(|v| QualityNote::try_new(v).unwrap()),
            },
        )
    }

    fn arb_cycle() -> impl Strategy<Value = QualityCycle> {
        (2020i32..2030, 1u32..=12, 0u32..24, proptest::collection::vec(arb_slot(), 0..30))
            .prop_map(|(year, month, span, slots)| {
                let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                QualityCycle {
                    id: CycleId::new(1),
                    start,
                    end: crate::domain::foundation::add_months_to_date(start, span),
                    slots,
                }
            })
    }

    proptest! {
        #[test]
        fn dense_series_always_matches_month_count(cycle in arb_cycle()) {
            prop_assert_eq!(cycle.dense_series().len(), cycle.month_count());
            prop_assert_eq!(cycle.month_labels().len(), cycle.month_count());
        }

        #[test]
        fn dense_series_values_stay_on_the_note_scale(cycle in arb_cycle()) {
            for value in cycle.dense_series() {
                prop_assert!((0.0..=20.0).contains(&value));
            }
        }

        #[test]
        fn average_stays_on_the_note_scale(cycle in arb_cycle()) {
            let mean = average(&cycle.dense_series());
            prop_assert!((0.0..=20.0).contains(&mean));
        }
    }
}
