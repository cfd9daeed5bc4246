use chrono::{DateTime, Utc};
use report_core::storage_keys::{report_object_key, ReportKind};
use serde_json::json;

use crate::adapters::object_store::ReportStore;
use crate::config::ReportStoreConfig;
use crate::logging::{log_error, log_info};

pub mod daily_report;
pub mod status;
pub mod text_report;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    pub message: String,
}

impl HandlerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HandlerError {}

/// Writes one report object and returns its key.
fn upload_report(
    component: &str,
    kind: ReportKind,
    body: &str,
    config: &ReportStoreConfig,
    now: DateTime<Utc>,
    store: &impl ReportStore,
) -> Result<String, HandlerError> {
    let key = report_object_key(&config.prefix, kind, now);

    if let Err(error) = store.write_object(&key, body.as_bytes(), kind.content_type()) {
        log_error(
            component,
            "report_upload_failed",
            json!({
                "bucket": config.bucket.clone(),
                "key": key,
                "error": error.clone(),
            }),
        );
        return Err(HandlerError::new(error));
    }

    log_info(
        component,
        "report_uploaded",
        json!({
            "bucket": config.bucket.clone(),
            "key": key.clone(),
            "bytes": body.len(),
        }),
    );
    Ok(key)
}
