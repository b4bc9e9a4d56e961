//! Quality module reader port (read side only).

use async_trait::async_trait;

use crate::domain::foundation::CycleId;
use crate::domain::quality::{QualityCycle, Thematique};

use super::ApiError;

/// Reader port for quality cycles and thematiques.
#[async_trait]
pub trait QualityReader: Send + Sync {
    /// `GET /cycles/id/{id}` - the cycle with its sparse month slots.
    ///
    /// Returns `None` if the id is unknown.
    async fn get_cycle(&self, id: CycleId) -> Result<Option<QualityCycle>, ApiError>;

    /// `GET /thematiques/` - every evaluation theme.
    async fn list_thematiques(&self) -> Result<Vec<Thematique>, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn QualityReader) {}
    }
}
