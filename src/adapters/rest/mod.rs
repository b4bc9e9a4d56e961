//! REST adapter for the GEMEX backend.
//!
//! One HTTP client implements all three ports; the backend is a single
//! API behind a single bearer token.

mod client;
mod quality_reader;
mod report_client;
mod task_client;

pub use client::{GemexRestClient, RestConfig};
