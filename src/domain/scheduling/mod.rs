//! Periodic maintenance task (fiche systématique) domain.
//!
//! A recurring task moves through unassigned → assigned → fulfilled;
//! fulfillments accumulate as history entries, and the latest entry plus
//! the task's periodicity decide whether a new occurrence is due.

mod classify;
mod task;

pub use classify::{
    classify_unassigned, classify_upcoming, is_todo_due, latest_occurrence, next_occurrence_due,
    TaskGlance, DEFAULT_UNASSIGNED_LIMIT, DEFAULT_UPCOMING_LIMIT,
};
pub use task::{HistoryEntry, PeriodicTask, TO_BE_ASSIGNED_TAG};
