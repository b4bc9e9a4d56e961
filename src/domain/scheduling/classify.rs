//! Dashboard classification and due-date derivation for periodic tasks.
//!
//! Pure functions: filtering preserves the backend response order, and
//! the task-to-glance mapping has no hidden state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::foundation::{add_months, TaskId, UserId};

use super::task::{HistoryEntry, PeriodicTask};

/// Cap on the "to assign" dashboard list.
pub const DEFAULT_UNASSIGNED_LIMIT: usize = 3;

/// Cap on the "upcoming" dashboard list.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Lightweight view record for dashboard lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGlance {
    pub label: String,
    pub date: DateTime<Utc>,
    pub task_id: TaskId,
}

impl From<&PeriodicTask> for TaskGlance {
    fn from(task: &PeriodicTask) -> Self {
        Self {
            label: task.name.clone(),
            date: task.created_at,
            task_id: task.id,
        }
    }
}

/// Tasks waiting for assignment within the user's work groups.
///
/// Keeps tasks carrying the sentinel tag whose owning groups intersect
/// `user_groups`, capped at `max_items`, in backend order.
pub fn classify_unassigned(
    tasks: &[PeriodicTask],
    user_groups: &[String],
    max_items: usize,
) -> Vec<TaskGlance> {
    tasks
        .iter()
        .filter(|t| t.is_unassigned() && t.owned_by_any(user_groups))
        .take(max_items)
        .map(TaskGlance::from)
        .collect()
}

/// Active tasks assigned to the user, sentinel excluded.
pub fn classify_upcoming(
    tasks: &[PeriodicTask],
    current_user: UserId,
    max_items: usize,
) -> Vec<TaskGlance> {
    tasks
        .iter()
        .filter(|t| t.assignee == Some(current_user) && t.is_active && !t.is_unassigned())
        .take(max_items)
        .map(TaskGlance::from)
        .collect()
}

/// The most recent fulfillment of a task, by occurrence date.
pub fn latest_occurrence(history: &[HistoryEntry]) -> Option<&HistoryEntry> {
    history.iter().max_by_key(|e| e.date)
}

/// When the next occurrence falls due, given the latest fulfillment.
///
/// `None` means the task has never been fulfilled and is due immediately.
pub fn next_occurrence_due(
    task: &PeriodicTask,
    latest: Option<&HistoryEntry>,
) -> Option<DateTime<Utc>> {
    latest.map(|entry| add_months(entry.date, task.periodicity_months))
}

/// Whether a synthetic "to do" occurrence should be surfaced.
///
/// True when the task was never fulfilled, or when the latest occurrence
/// plus the periodicity has been reached (boundary inclusive).
pub fn is_todo_due(task: &PeriodicTask, latest: Option<&HistoryEntry>, now: DateTime<Utc>) -> bool {
    match next_occurrence_due(task, latest) {
        None => true,
        Some(due) => now >= due,
    }
}
