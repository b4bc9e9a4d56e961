//! GetCycleStatsHandler - chart-ready statistics for one cycle.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::CycleId;
use crate::domain::quality::average;
use crate::ports::{ApiError, QualityReader};

/// Chart/export-ready view of a cycle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStats {
    pub cycle_id: CycleId,

    /// One capitalized French label per month of the span.
    pub labels: Vec<String>,

    /// Dense note series, missing months padded with zero.
    pub series: Vec<f64>,

    /// Mean over the dense series, padded zeros included.
    pub average: f64,

    /// Slots actually carrying a note; lets callers distinguish "scored
    /// zero" from "not yet evaluated" despite the padded series.
    pub evaluated_count: usize,

    /// Month ordinal (1-based) of the most advanced slot.
    pub latest_month: Option<u32>,

    /// Note of that slot, when scored.
    pub latest_note: Option<f64>,

    /// Signed gap between the latest note and the 16/20 goal.
    pub latest_distance_to_goal: Option<f64>,
}

/// Error type for the stats query.
#[derive(Debug)]
pub enum GetCycleStatsError {
    NotFound(CycleId),
    Auth,
    Infrastructure(ApiError),
}

impl std::fmt::Display for GetCycleStatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetCycleStatsError::NotFound(id) => write!(f, "cycle not found: {}", id),
            GetCycleStatsError::Auth => write!(f, "authentication failed"),
            GetCycleStatsError::Infrastructure(err) => write!(f, "cycle fetch failed: {}", err),
        }
    }
}

impl std::error::Error for GetCycleStatsError {}

impl From<ApiError> for GetCycleStatsError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth => GetCycleStatsError::Auth,
            other => GetCycleStatsError::Infrastructure(other),
        }
    }
}

/// Handler computing cycle statistics.
pub struct GetCycleStatsHandler {
    reader: Arc<dyn QualityReader>,
}

impl GetCycleStatsHandler {
    pub fn new(reader: Arc<dyn QualityReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, cycle_id: CycleId) -> Result<CycleStats, GetCycleStatsError> {
        let cycle = self
            .reader
            .get_cycle(cycle_id)
            .await?
            .ok_or(GetCycleStatsError::NotFound(cycle_id))?;

        let series = cycle.dense_series();
        let latest = cycle.latest_month();

        Ok(CycleStats {
            cycle_id: cycle.id,
            labels: cycle.month_labels(),
            average: average(&series),
            evaluated_count: cycle.evaluated_count(),
            latest_month: latest.map(|s| s.month),
            latest_note: latest.and_then(|s| s.note).map(|n| n.value()),
            latest_distance_to_goal: latest.and_then(|s| s.note).map(|n| n.distance_to_goal()),
            series,
        })
    }
}
