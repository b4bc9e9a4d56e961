//! ListDueThematiquesHandler - thematiques awaiting evaluation.
//!
//! The caller supplies the current month's evaluations (the month view
//! already holds them) and a reference instant, so the due predicate
//! stays deterministic and testable.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::quality::{due_thematiques, Thematique, ThematiqueEvaluation};
use crate::ports::{ApiError, QualityReader};

/// Query for the due-thematiques list.
#[derive(Debug, Clone)]
pub struct DueThematiquesQuery {
    /// Evaluations already recorded in the month under review.
    pub evaluations: Vec<ThematiqueEvaluation>,
    /// Reference instant for the periodicity check.
    pub now: DateTime<Utc>,
}

/// Error type for the due-thematiques query.
#[derive(Debug)]
pub enum ListDueThematiquesError {
    Auth,
    Infrastructure(ApiError),
}

impl std::fmt::Display for ListDueThematiquesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListDueThematiquesError::Auth => write!(f, "authentication failed"),
            ListDueThematiquesError::Infrastructure(err) => {
                write!(f, "thematique fetch failed: {}", err)
            }
        }
    }
}

impl std::error::Error for ListDueThematiquesError {}

impl From<ApiError> for ListDueThematiquesError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth => ListDueThematiquesError::Auth,
            other => ListDueThematiquesError::Infrastructure(other),
        }
    }
}

/// Handler listing the thematiques due for evaluation.
pub struct ListDueThematiquesHandler {
    reader: Arc<dyn QualityReader>,
}

impl ListDueThematiquesHandler {
    pub fn new(reader: Arc<dyn QualityReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: DueThematiquesQuery,
    ) -> Result<Vec<Thematique>, ListDueThematiquesError> {
        let thematiques = self.reader.list_thematiques().await?;
        Ok(due_thematiques(&thematiques, &query.evaluations, query.now)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CycleId, ThematiqueId};
    use crate::domain::quality::QualityCycle;
    use async_trait::async_trait;
    use chrono::TimeZone;

    struct MockQualityReader {
        thematiques: Vec<Thematique>,
    }

    #[async_trait]
    impl QualityReader for MockQualityReader {
        async fn get_cycle(&self, _id: CycleId) -> Result<Option<QualityCycle>, ApiError> {
            Ok(None)
        }

        async fn list_thematiques(&self) -> Result<Vec<Thematique>, ApiError> {
            Ok(self.thematiques.clone())
        }
    }

    fn thematique(id: i64) -> Thematique {
        Thematique {
            id: ThematiqueId::new(id),
            name: format!("Thématique {}", id),
            periodicity_months: 1,
        }
    }

    #[tokio::test]
    async fn recently_evaluated_thematiques_are_filtered_out() {
        let reader = Arc::new(MockQualityReader {
            thematiques: vec![thematique(1), thematique(2)],
        });
        let handler = ListDueThematiquesHandler::new(reader);

        let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let fresh = ThematiqueEvaluation {
            id: 1,
            thematique_id: ThematiqueId::new(2),
            note: None,
            due_date: Utc.with_ymd_and_hms(2023, 5, 20, 0, 0, 0).unwrap(),
            handed_in: None,
        };

        let due = handler
            .handle(DueThematiquesQuery {
                evaluations: vec![fresh],
                now,
            })
            .await
            .unwrap();

        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, ThematiqueId::new(1));
    }
}
