//! Periodic-task handlers.

mod assign_task;
mod edit_history_comment;
mod get_task_overview;
mod record_fulfillment;

pub use assign_task::{AssignTaskError, AssignTaskHandler};
pub use edit_history_comment::{EditHistoryCommentError, EditHistoryCommentHandler};
pub use get_task_overview::{GetTaskOverviewHandler, TaskOverview, TaskOverviewError, TaskOverviewQuery};
pub use record_fulfillment::{
    RecordFulfillmentCommand, RecordFulfillmentError, RecordFulfillmentHandler,
};
