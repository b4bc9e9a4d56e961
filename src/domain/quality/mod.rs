//! Quality evaluation domain.
//!
//! A cycle spans a fixed window of months; the backend materializes
//! month slots lazily, so the slot list is sparse and unordered. The
//! aggregator synthesizes dense, chart-ready series from it. Thematic
//! evaluations recur on their own periodicity within a month.

mod csv;
mod cycle;
mod thematique;

pub use csv::{cycle_to_csv, thematic_to_csv, ThematicScore};
pub use cycle::{average, MonthSlot, QualityCycle};
pub use thematique::{due_thematiques, should_evaluate, Thematique, ThematiqueEvaluation};
