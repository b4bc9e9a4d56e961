//! GetTaskOverviewHandler - dashboard lists for periodic tasks.
//!
//! Produces the two capped glance lists: tasks waiting for assignment
//! within the user's groups, and the user's own upcoming tasks.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::scheduling::{
    classify_unassigned, classify_upcoming, TaskGlance, DEFAULT_UNASSIGNED_LIMIT,
    DEFAULT_UPCOMING_LIMIT, TO_BE_ASSIGNED_TAG,
};
use crate::ports::{ApiError, TaskClient, TaskSearchFilter};

/// Query for the task dashboard.
#[derive(Debug, Clone)]
pub struct TaskOverviewQuery {
    pub user_id: UserId,
    pub user_groups: Vec<String>,
    /// Cap on the "to assign" list; defaults to 3.
    pub unassigned_limit: usize,
    /// Cap on the "upcoming" list; defaults to 5.
    pub upcoming_limit: usize,
}

impl TaskOverviewQuery {
    pub fn new(user_id: UserId, user_groups: Vec<String>) -> Self {
        Self {
            user_id,
            user_groups,
            unassigned_limit: DEFAULT_UNASSIGNED_LIMIT,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

/// Both dashboard lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOverview {
    pub to_assign: Vec<TaskGlance>,
    pub upcoming: Vec<TaskGlance>,
}

/// Error type for the overview query.
#[derive(Debug)]
pub enum TaskOverviewError {
    Auth,
    Infrastructure(ApiError),
}

impl std::fmt::Display for TaskOverviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskOverviewError::Auth => write!(f, "authentication failed"),
            TaskOverviewError::Infrastructure(err) => write!(f, "task search failed: {}", err),
        }
    }
}

impl std::error::Error for TaskOverviewError {}

impl From<ApiError> for TaskOverviewError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth => TaskOverviewError::Auth,
            other => TaskOverviewError::Infrastructure(other),
        }
    }
}

/// Handler building the periodic-task dashboard.
pub struct GetTaskOverviewHandler {
    client: Arc<dyn TaskClient>,
}

impl GetTaskOverviewHandler {
    pub fn new(client: Arc<dyn TaskClient>) -> Self {
        Self { client }
    }

    /// Runs both searches and classifies locally.
    ///
    /// The backend filter narrows the transfer; classification is
    /// re-applied on the result so a lax backend cannot leak tasks into
    /// the wrong list.
    pub async fn handle(&self, query: TaskOverviewQuery) -> Result<TaskOverview, TaskOverviewError> {
        let unassigned_filter = TaskSearchFilter::default()
            .with_tags(vec![TO_BE_ASSIGNED_TAG.to_string()])
            .with_groups(query.user_groups.clone());
        let unassigned = self
            .client
            .search_tasks(&unassigned_filter, query.unassigned_limit)
            .await?;

        let upcoming_filter = TaskSearchFilter::default()
            .with_assignee(query.user_id)
            .with_active(true);
        let upcoming = self
            .client
            .search_tasks(&upcoming_filter, query.upcoming_limit)
            .await?;

        Ok(TaskOverview {
            to_assign: classify_unassigned(&unassigned, &query.user_groups, query.unassigned_limit),
            upcoming: classify_upcoming(&upcoming, query.user_id, query.upcoming_limit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HistoryEntryId, TaskId};
    use crate::domain::scheduling::{HistoryEntry, PeriodicTask};
    use crate::ports::FulfillmentRequest;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct MockTaskClient {
        tasks: Vec<PeriodicTask>,
        fail: bool,
    }

    #[async_trait]
    impl TaskClient for MockTaskClient {
        async fn search_tasks(
            &self,
            filter: &TaskSearchFilter,
            _max: usize,
        ) -> Result<Vec<PeriodicTask>, ApiError> {
            if self.fail {
                return Err(ApiError::Server { status: 500 });
            }
            // Crude backend-side filter: sentinel tag when requested.
            Ok(self
                .tasks
                .iter()
                .filter(|t| {
                    filter.tags.is_empty() || filter.tags.iter().all(|tag| t.tags.contains(tag))
                })
                .filter(|t| filter.assignee.is_none() || t.assignee == filter.assignee)
                .cloned()
                .collect())
        }

        async fn assign(&self, _task_id: TaskId, _user_id: UserId) -> Result<(), ApiError> {
            Ok(())
        }

        async fn list_history(&self, _task_id: TaskId) -> Result<Vec<HistoryEntry>, ApiError> {
            Ok(vec![])
        }

        async fn get_history_entry(
            &self,
            _entry_id: HistoryEntryId,
        ) -> Result<Option<HistoryEntry>, ApiError> {
            Ok(None)
        }

        async fn record_fulfillment(&self, _request: &FulfillmentRequest) -> Result<(), ApiError> {
            Ok(())
        }

        async fn edit_history_comment(
            &self,
            _entry_id: HistoryEntryId,
            _new_comment: &str,
        ) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn task(id: i64, tags: &[&str], assignee: Option<i64>) -> PeriodicTask {
        PeriodicTask {
            id: TaskId::new(id),
            name: format!("Tâche {}", id),
            assignee: assignee.map(UserId::new),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            groups: vec!["A".to_string()],
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            periodicity_months: 1,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn overview_splits_unassigned_and_upcoming() {
        let client = Arc::new(MockTaskClient {
            tasks: vec![
                task(1, &[TO_BE_ASSIGNED_TAG], None),
                task(2, &["Opération"], Some(9)),
                task(3, &["Opération"], Some(10)),
            ],
            fail: false,
        });
        let handler = GetTaskOverviewHandler::new(client);

        let overview = handler
            .handle(TaskOverviewQuery::new(UserId::new(9), vec!["A".to_string()]))
            .await
            .unwrap();

        assert_eq!(overview.to_assign.len(), 1);
        assert_eq!(overview.to_assign[0].task_id, TaskId::new(1));
        assert_eq!(overview.upcoming.len(), 1);
        assert_eq!(overview.upcoming[0].task_id, TaskId::new(2));
    }

    #[tokio::test]
    async fn backend_failure_surfaces_as_infrastructure() {
        let client = Arc::new(MockTaskClient { tasks: vec![], fail: true });
        let handler = GetTaskOverviewHandler::new(client);

        let result = handler
            .handle(TaskOverviewQuery::new(UserId::new(9), vec![]))
            .await;
        assert!(matches!(result, Err(TaskOverviewError::Infrastructure(_))));
    }
}
