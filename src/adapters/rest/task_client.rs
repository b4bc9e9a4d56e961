//! TaskClient over the REST backend.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{HistoryEntryId, TaskId, UserId};
use crate::domain::scheduling::{HistoryEntry, PeriodicTask};
use crate::ports::{ApiError, FulfillmentRequest, TaskClient, TaskSearchFilter};

use super::client::GemexRestClient;

#[derive(Serialize)]
struct AssignBody {
    user_en_charge_id: UserId,
}

#[derive(Serialize)]
struct CommentBody<'a> {
    commentaire: &'a str,
}

#[async_trait]
impl TaskClient for GemexRestClient {
    async fn search_tasks(
        &self,
        filter: &TaskSearchFilter,
        max: usize,
    ) -> Result<Vec<PeriodicTask>, ApiError> {
        self.post_json(&format!("/fiches_systematiques/search/?max={}", max), filter)
            .await
    }

    async fn assign(&self, task_id: TaskId, user_id: UserId) -> Result<(), ApiError> {
        let body = AssignBody {
            user_en_charge_id: user_id,
        };
        self.put_unit(&format!("/fiches_systematiques/{}", task_id), &body)
            .await
    }

    async fn list_history(&self, task_id: TaskId) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_json(&format!(
            "/historiques_fiches_systematiques/fiche/{}",
            task_id
        ))
        .await
    }

    async fn get_history_entry(
        &self,
        entry_id: HistoryEntryId,
    ) -> Result<Option<HistoryEntry>, ApiError> {
        self.get_optional(&format!("/historiques_fiches_systematiques/{}", entry_id))
            .await
    }

    async fn record_fulfillment(&self, request: &FulfillmentRequest) -> Result<(), ApiError> {
        self.post_unit("/historiques_fiches_systematiques/", request)
            .await
    }

    async fn edit_history_comment(
        &self,
        entry_id: HistoryEntryId,
        new_comment: &str,
    ) -> Result<(), ApiError> {
        let body = CommentBody {
            commentaire: new_comment,
        };
        self.put_unit(
            &format!("/historiques_fiches_systematiques/{}", entry_id),
            &body,
        )
        .await
    }
}
