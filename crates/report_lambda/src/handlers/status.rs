use chrono::{DateTime, Utc};
use report_core::contract::HandlerResponse;
use report_core::report::status_body;
use serde_json::json;

use crate::handlers::HandlerError;
use crate::logging::log_info;

/// Returns the status envelope directly; nothing is written to storage.
pub fn handle_status(now: DateTime<Utc>) -> Result<HandlerResponse, HandlerError> {
    let body = status_body(now);
    let response = HandlerResponse::ok_json(&body)
        .map_err(|error| HandlerError::new(format!("failed to serialize status body: {error}")))?;

    log_info(
        "status_handler",
        "status_reported",
        json!({ "timestamp": body.timestamp }),
    );
    Ok(response)
}
