//! Application layer - one handler per operation, ports injected.

pub mod handlers;

pub use handlers::report::PollConfig;
