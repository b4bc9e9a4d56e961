//! Domain layer - pure types and transforms, no I/O.

pub mod foundation;
pub mod quality;
pub mod report;
pub mod scheduling;
