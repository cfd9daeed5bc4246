//! AWS-oriented adapters and handlers for the report functions.
//!
//! This crate owns runtime integration details (Lambda binaries, environment
//! configuration, and the S3 report store). Payload and key naming rules come
//! from `report_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
