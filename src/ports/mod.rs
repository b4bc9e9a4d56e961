//! Ports - interfaces to the remote GEMEX REST backend.

mod error;
mod quality_reader;
mod report_client;
mod task_client;

pub use error::ApiError;
pub use quality_reader::QualityReader;
pub use report_client::{DoneResponse, ReportClient};
pub use task_client::{FulfillmentRequest, TaskClient, TaskSearchFilter};
