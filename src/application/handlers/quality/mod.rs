//! Quality module handlers.

mod get_cycle_stats;
mod list_due_thematiques;

pub use get_cycle_stats::{CycleStats, GetCycleStatsError, GetCycleStatsHandler};
pub use list_due_thematiques::{
    DueThematiquesQuery, ListDueThematiquesError, ListDueThematiquesHandler,
};
