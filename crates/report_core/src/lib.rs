//! Shared report function domain primitives.
//!
//! This crate owns the deterministic parts of the report functions: payload
//! rendering, object key naming, and the response envelope returned to the
//! invoking platform. It intentionally excludes AWS SDK and Lambda runtime
//! concerns, which live in `report_lambda`.

pub mod contract;
pub mod report;
pub mod storage_keys;
