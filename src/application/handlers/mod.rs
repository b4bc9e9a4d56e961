pub mod quality;
pub mod report;
pub mod scheduling;
