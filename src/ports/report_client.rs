//! Report client port.
//!
//! Three calls cover the report lifecycle: creation (returns a shell
//! with a null `taux`), a cheap done-flag probe used by the polling
//! loop, and the full fetch of a durable report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ReportId;
use crate::domain::report::{AvailabilityReport, ReportRequest};

use super::ApiError;

/// Port for availability-report operations.
#[async_trait]
pub trait ReportClient: Send + Sync {
    /// `POST /rapports/` - starts the backend computation job.
    ///
    /// Returns the report shell; its `rate` is `None` until the job
    /// finishes.
    async fn create_report(&self, request: &ReportRequest) -> Result<AvailabilityReport, ApiError>;

    /// `GET /rapports/id/{id}/done` - probes job completion.
    async fn is_done(&self, id: ReportId) -> Result<bool, ApiError>;

    /// `GET /rapports/id/{id}` - fetches the full report.
    ///
    /// Returns `None` if the id is unknown.
    async fn get_report(&self, id: ReportId) -> Result<Option<AvailabilityReport>, ApiError>;
}

/// Wire shape of the done-flag probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DoneResponse {
    pub done: bool,
}
