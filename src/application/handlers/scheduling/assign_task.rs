//! AssignTaskHandler - takes charge of an unassigned periodic task.
//!
//! The PUT itself is idempotent, but the historical UI let a rapid
//! double-click fire two updates; the handler holds an in-flight flag
//! so a concurrent second call gets `InFlight` instead of a request.
//! On success the caller is expected to refresh its classification;
//! the backend is the source of truth for the assignment.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{TaskId, UserId};
use crate::ports::{ApiError, TaskClient};

/// Error type for task assignment.
#[derive(Debug)]
pub enum AssignTaskError {
    /// A previous assignment request is still running.
    InFlight,
    Auth,
    NotFound(TaskId),
    Infrastructure(ApiError),
}

impl std::fmt::Display for AssignTaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignTaskError::InFlight => write!(f, "assignment already in progress"),
            AssignTaskError::Auth => write!(f, "authentication failed"),
            AssignTaskError::NotFound(id) => write!(f, "task not found: {}", id),
            AssignTaskError::Infrastructure(err) => write!(f, "assignment failed: {}", err),
        }
    }
}

impl std::error::Error for AssignTaskError {}

/// Handler updating a task's responsible user.
pub struct AssignTaskHandler {
    client: Arc<dyn TaskClient>,
    in_flight: AtomicBool,
}

impl AssignTaskHandler {
    pub fn new(client: Arc<dyn TaskClient>) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn handle(&self, task_id: TaskId, user_id: UserId) -> Result<(), AssignTaskError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AssignTaskError::InFlight);
        }

        let result = self.client.assign(task_id, user_id).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(()) => {
                info!(%task_id, %user_id, "task assigned");
                Ok(())
            }
            Err(ApiError::Auth) => Err(AssignTaskError::Auth),
            Err(ApiError::NotFound { .. }) => Err(AssignTaskError::NotFound(task_id)),
            Err(err) => Err(AssignTaskError::Infrastructure(err)),
        }
    }
}
