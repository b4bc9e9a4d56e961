//! Periodic-task client port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HistoryEntryId, TaskId, UserId};
use crate::domain::scheduling::{HistoryEntry, PeriodicTask};

use super::ApiError;

/// Port for periodic-task reads and mutations.
#[async_trait]
pub trait TaskClient: Send + Sync {
    /// `POST /fiches_systematiques/search/?max={max}` - filtered search.
    ///
    /// Result order is the backend's; classification preserves it.
    async fn search_tasks(
        &self,
        filter: &TaskSearchFilter,
        max: usize,
    ) -> Result<Vec<PeriodicTask>, ApiError>;

    /// `PUT /fiches_systematiques/{id}` - updates the responsible user.
    async fn assign(&self, task_id: TaskId, user_id: UserId) -> Result<(), ApiError>;

    /// `GET /historiques_fiches_systematiques/fiche/{id}` - full
    /// fulfillment history of one task.
    async fn list_history(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, ApiError>;

    /// `GET /historiques_fiches_systematiques/{id}` - a single entry.
    ///
    /// Returns `None` if the id is unknown.
    async fn get_history_entry(
        &self,
        entry_id: HistoryEntryId,
    ) -> Result<Option<HistoryEntry>, ApiError>;

    /// `POST /historiques_fiches_systematiques/` - appends a
    /// fulfillment occurrence.
    async fn record_fulfillment(&self, request: &FulfillmentRequest) -> Result<(), ApiError>;

    /// `PUT /historiques_fiches_systematiques/{id}` - edits one
    /// entry's comment.
    async fn edit_history_comment(
        &self,
        entry_id: HistoryEntryId,
        new_comment: &str,
    ) -> Result<(), ApiError>;
}

/// Filter object for the task search endpoint.
///
/// Absent fields are omitted from the body so the backend treats them
/// as wildcards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskSearchFilter {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub groups: Vec<String>,
    #[serde(rename = "user_en_charge_id", skip_serializing_if = "Option::is_none", default)]
    pub assignee: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub is_active: Option<bool>,
}

impl TaskSearchFilter {
    /// Restricts to tasks carrying all of `tags`.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Restricts to tasks owned by any of `groups`.
    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    /// Restricts to tasks assigned to `user`.
    pub fn with_assignee(mut self, user: UserId) -> Self {
        self.assignee = Some(user);
        self
    }

    /// Restricts on the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }
}

/// Body of the fulfillment POST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FulfillmentRequest {
    #[serde(rename = "fiche_id")]
    pub task_id: TaskId,
    #[serde(rename = "commentaire")]
    pub comment: String,
    pub date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_client_is_object_safe() {
        fn _accepts_dyn(_client: &dyn TaskClient) {}
    }

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        let json = serde_json::to_string(&TaskSearchFilter::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn filter_builder_sets_wire_fields() {
        let filter = TaskSearchFilter::default()
            .with_tags(vec!["À attribuer".to_string()])
            .with_assignee(UserId::new(4))
            .with_active(true);

        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["tags"][0], "À attribuer");
        assert_eq!(json["user_en_charge_id"], 4);
        assert_eq!(json["is_active"], true);
        assert!(json.get("groups").is_none());
    }

    #[test]
    fn fulfillment_request_uses_french_wire_names() {
        let request = FulfillmentRequest {
            task_id: TaskId::new(8),
            comment: "vitres nettoyées".to_string(),
            date: "2023-05-01T09:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fiche_id"], 8);
        assert_eq!(json["commentaire"], "vitres nettoyées");
    }
}
