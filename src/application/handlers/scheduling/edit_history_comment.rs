//! EditHistoryCommentHandler - rewrites one fulfillment comment.
//!
//! Only the entry's author may edit it; the entry is fetched and the
//! author checked before the write goes out.

use std::sync::Arc;

use crate::domain::foundation::{HistoryEntryId, UserId};
use crate::ports::{ApiError, TaskClient};

/// Error type for comment edition.
#[derive(Debug)]
pub enum EditHistoryCommentError {
    NotFound(HistoryEntryId),
    /// The caller is not the entry's author.
    NotAuthor,
    Auth,
    Infrastructure(ApiError),
}

impl std::fmt::Display for EditHistoryCommentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditHistoryCommentError::NotFound(id) => write!(f, "history entry not found: {}", id),
            EditHistoryCommentError::NotAuthor => {
                write!(f, "only the author may edit a history comment")
            }
            EditHistoryCommentError::Auth => write!(f, "authentication failed"),
            EditHistoryCommentError::Infrastructure(err) => write!(f, "comment edit failed: {}", err),
        }
    }
}

impl std::error::Error for EditHistoryCommentError {}

impl From<ApiError> for EditHistoryCommentError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth => EditHistoryCommentError::Auth,
            other => EditHistoryCommentError::Infrastructure(other),
        }
    }
}

/// Handler editing a history entry's comment.
pub struct EditHistoryCommentHandler {
    client: Arc<dyn TaskClient>,
}

impl EditHistoryCommentHandler {
    pub fn new(client: Arc<dyn TaskClient>) -> Self {
        Self { client }
    }

    pub async fn handle(
        &self,
        entry_id: HistoryEntryId,
        new_comment: &str,
        current_user: UserId,
    ) -> Result<(), EditHistoryCommentError> {
        let entry = self
            .client
            .get_history_entry(entry_id)
            .await?
            .ok_or(EditHistoryCommentError::NotFound(entry_id))?;

        if entry.user_id != current_user {
            return Err(EditHistoryCommentError::NotAuthor);
        }

        self.client.edit_history_comment(entry_id, new_comment).await?;
        Ok(())
    }
}
