//! Quality note value object (0-20 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An evaluation score on the French 0-20 scale.
///
/// Quality cycles and thematic evaluations are scored against a fixed
/// goal of 16/20.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QualityNote(f64);

impl QualityNote {
    /// The quality goal every month is measured against.
    pub const GOAL: f64 = 16.0;

    /// Maximum score on the scale.
    pub const MAX: f64 = 20.0;

    /// Creates a note, returning error if outside the 0-20 scale.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range("note", 0.0, Self::MAX, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw score.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Signed distance to the 16/20 goal; negative when below goal.
    pub fn distance_to_goal(&self) -> f64 {
        self.0 - Self::GOAL
    }

    /// Returns true if the goal is met or exceeded.
    pub fn meets_goal(&self) -> bool {
        self.0 >= Self::GOAL
    }
}

impl fmt::Display for QualityNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display drops a trailing ".0", so whole scores print as "12".
        write!(f, "{}", self.0)
    }
}
