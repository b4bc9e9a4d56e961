//! Periodic task and fulfillment-history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HistoryEntryId, TaskId, UserId};

/// Sentinel tag marking a task as not yet assigned to a responsible user.
pub const TO_BE_ASSIGNED_TAG: &str = "À attribuer";

/// A recurring maintenance task definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodicTask {
    pub id: TaskId,
    #[serde(rename = "nom")]
    pub name: String,
    /// Responsible user; meaningful only once the task is assigned.
    #[serde(rename = "user_en_charge_id")]
    pub assignee: Option<UserId>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Work groups that own this task.
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(rename = "date_creation")]
    pub created_at: DateTime<Utc>,
    /// Recurrence interval in calendar months.
    #[serde(rename = "periodicite")]
    pub periodicity_months: u32,
    #[serde(default)]
    pub is_active: bool,
}

impl PeriodicTask {
    /// True while the sentinel tag is present.
    pub fn is_unassigned(&self) -> bool {
        self.tags.iter().any(|t| t == TO_BE_ASSIGNED_TAG)
    }

    /// True if any of `groups` owns this task.
    pub fn owned_by_any(&self, groups: &[String]) -> bool {
        self.groups.iter().any(|g| groups.contains(g))
    }
}

/// One fulfillment occurrence of a periodic task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryEntryId,
    #[serde(rename = "fiche_id")]
    pub task_id: TaskId,
    pub user_id: UserId,
    #[serde(rename = "commentaire")]
    pub comment: String,
    pub date: DateTime<Utc>,
}
