//! ReportClient over the REST backend.

use async_trait::async_trait;

use crate::domain::foundation::ReportId;
use crate::domain::report::{AvailabilityReport, ReportRequest};
use crate::ports::{ApiError, DoneResponse, ReportClient};

use super::client::GemexRestClient;

#[async_trait]
impl ReportClient for GemexRestClient {
    async fn create_report(&self, request: &ReportRequest) -> Result<AvailabilityReport, ApiError> {
        self.post_json("/rapports/", request).await
    }

    async fn is_done(&self, id: ReportId) -> Result<bool, ApiError> {
        let response: DoneResponse = self
            .get_json(&format!("/rapports/id/{}/done", id))
            .await?;
        Ok(response.done)
    }

    async fn get_report(&self, id: ReportId) -> Result<Option<AvailabilityReport>, ApiError> {
        self.get_optional(&format!("/rapports/id/{}", id)).await
    }
}
