//! RecordFulfillmentHandler - appends a fulfillment occurrence.
//!
//! The occurrence date must not precede the latest recorded occurrence.
//! The historical client only constrained the date picker; here the
//! bound is re-validated at the write boundary, against the history the
//! backend actually holds.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::foundation::TaskId;
use crate::domain::scheduling::latest_occurrence;
use crate::ports::{ApiError, FulfillmentRequest, TaskClient};

/// Command to record one fulfillment.
#[derive(Debug, Clone)]
pub struct RecordFulfillmentCommand {
    pub task_id: TaskId,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// Error type for recording a fulfillment.
#[derive(Debug)]
pub enum RecordFulfillmentError {
    /// The date precedes the latest recorded occurrence.
    DateBeforeLatest { not_before: DateTime<Utc> },
    Auth,
    Infrastructure(ApiError),
}

impl std::fmt::Display for RecordFulfillmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordFulfillmentError::DateBeforeLatest { not_before } => {
                write!(f, "fulfillment date must not precede {}", not_before)
            }
            RecordFulfillmentError::Auth => write!(f, "authentication failed"),
            RecordFulfillmentError::Infrastructure(err) => {
                write!(f, "recording fulfillment failed: {}", err)
            }
        }
    }
}

impl std::error::Error for RecordFulfillmentError {}

impl From<ApiError> for RecordFulfillmentError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth => RecordFulfillmentError::Auth,
            other => RecordFulfillmentError::Infrastructure(other),
        }
    }
}

/// Handler appending a history entry after validating its date.
pub struct RecordFulfillmentHandler {
    client: Arc<dyn TaskClient>,
}

impl RecordFulfillmentHandler {
    pub fn new(client: Arc<dyn TaskClient>) -> Self {
        Self { client }
    }

    pub async fn handle(
        &self,
        command: RecordFulfillmentCommand,
    ) -> Result<(), RecordFulfillmentError> {
        let history = self.client.list_history(command.task_id).await?;
        if let Some(latest) = latest_occurrence(&history) {
            if command.date < latest.date {
                return Err(RecordFulfillmentError::DateBeforeLatest {
                    not_before: latest.date,
                });
            }
        }

        let request = FulfillmentRequest {
            task_id: command.task_id,
            comment: command.comment,
            date: command.date,
        };
        self.client.record_fulfillment(&request).await?;
        info!(task_id = %request.task_id, date = %request.date, "fulfillment recorded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HistoryEntryId, UserId};
    use crate::domain::scheduling::{HistoryEntry, PeriodicTask};
    use crate::ports::TaskSearchFilter;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::Mutex;

    struct MockTaskClient {
        history: Vec<HistoryEntry>,
        recorded: Mutex<Vec<FulfillmentRequest>>,
    }

    impl MockTaskClient {
        fn with_history(history: Vec<HistoryEntry>) -> Self {
            Self {
                history,
                recorded: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl TaskClient for MockTaskClient {
        async fn search_tasks(
            &self,
            _filter: &TaskSearchFilter,
            _max: usize,
        ) -> Result<Vec<PeriodicTask>, ApiError> {
            Ok(vec![])
        }

        async fn assign(&self, _task_id: TaskId, _user_id: UserId) -> Result<(), ApiError> {
            Ok(())
        }

        async fn list_history(&self, _task_id: TaskId) -> Result<Vec<HistoryEntry>, ApiError> {
            Ok(self.history.clone())
        }

        async fn get_history_entry(
            &self,
            _entry_id: HistoryEntryId,
        ) -> Result<Option<HistoryEntry>, ApiError> {
            Ok(None)
        }

        async fn record_fulfillment(&self, request: &FulfillmentRequest) -> Result<(), ApiError> {
            self.recorded.lock().unwrap().push(request.clone());
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

    fn entry(date: DateTime<Utc>) -> HistoryEntry {
        HistoryEntry {
            id: HistoryEntryId::new(1),
            task_id: TaskId::new(5),
            user_id: UserId::new(9),
            comment: "fait".to_string(),
            date,
        }
    }

    fn command(date: DateTime<Utc>) -> RecordFulfillmentCommand {
        RecordFulfillmentCommand {
            task_id: TaskId::new(5),
            comment: "vitrine nettoyée".to_string(),
            date,
        }
    }

    #[tokio::test]
    async fn first_fulfillment_needs_no_lower_bound() {
        let client = Arc::new(MockTaskClient::with_history(vec![]));
        let handler = RecordFulfillmentHandler::new(client.clone());

        let date = Utc.with_ymd_and_hms(2023, 5, 1, 9, 0, 0).unwrap();
        handler.handle(command(date)).await.unwrap();
        assert_eq!(client.recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn date_before_latest_is_rejected_without_posting() {
        let latest = Utc.with_ymd_and_hms(2023, 5, 1, 9, 0, 0).unwrap();
        let client = Arc::new(MockTaskClient::with_history(vec![entry(latest)]));
        let handler = RecordFulfillmentHandler::new(client.clone());

        let result = handler
            .handle(command(Utc.with_ymd_and_hms(2023, 4, 30, 9, 0, 0).unwrap()))
            .await;

        assert!(matches!(
            result,
            Err(RecordFulfillmentError::DateBeforeLatest { not_before }) if not_before == latest
        ));
        assert!(client.recorded.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn date_equal_to_latest_is_accepted() {
        let latest = Utc.with_ymd_and_hms(2023, 5, 1, 9, 0, 0).unwrap();
        let client = Arc::new(MockTaskClient::with_history(vec![entry(latest)]));
        let handler = RecordFulfillmentHandler::new(client.clone());

        handler.handle(command(latest)).await.unwrap();
        assert_eq!(client.recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bound_uses_latest_not_first_entry() {
        let older = entry(Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap());
        let newer = entry(Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap());
        let client = Arc::new(MockTaskClient::with_history(vec![newer, older]));
        let handler = RecordFulfillmentHandler::new(client.clone());

        let result = handler
            .handle(command(Utc.with_ymd_and_hms(2023, 4, 1, 0, 0, 0).unwrap()))
            .await;
        assert!(matches!(
            result,
            Err(RecordFulfillmentError::DateBeforeLatest { .. })
        ));
    }
}
