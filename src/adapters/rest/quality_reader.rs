//! QualityReader over the REST backend.

use async_trait::async_trait;

use crate::domain::foundation::CycleId;
use crate::domain::quality::{QualityCycle, Thematique};
use crate::ports::{ApiError, QualityReader};

use super::client::GemexRestClient;

#[async_trait]
impl QualityReader for GemexRestClient {
    async fn get_cycle(&self, id: CycleId) -> Result<Option<QualityCycle>, ApiError> {
        self.get_optional(&format!("/cycles/id/{}", id)).await
    }

    async fn list_thematiques(&self) -> Result<Vec<Thematique>, ApiError> {
        self.get_json("/thematiques/").await
    }
}
