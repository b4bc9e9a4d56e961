//! Strongly-typed identifier value objects.
//!
//! The GEMEX backend hands out integer primary keys; each entity kind
//! gets its own newtype so a report id can never be passed where a
//! task id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! integer_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a backend-issued id.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the inner integer.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

integer_id!(
    /// Unique identifier for an availability report.
    ReportId
);

integer_id!(
    /// Unique identifier for a periodic maintenance task (fiche systématique).
    TaskId
);

integer_id!(
    /// Unique identifier for one fulfillment entry in a task's history.
    HistoryEntryId
);

integer_id!(
    /// Unique identifier for a quality-evaluation cycle.
    CycleId
);

integer_id!(
    /// Unique identifier for an evaluation theme.
    ThematiqueId
);

integer_id!(
    /// Unique identifier for a user account.
    UserId
);

integer_id!(
    /// Unique identifier for an exposition.
    ExpositionId
);
