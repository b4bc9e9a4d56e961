//! GEMEX Core - Museum Operations Management
//!
//! This crate implements the operations core of the GEMEX client:
//! availability-ratio report generation with asynchronous backend polling,
//! the periodic maintenance task (fiche systématique) lifecycle, and
//! quality-cycle aggregation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
