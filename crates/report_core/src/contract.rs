use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SUCCESS_STATUS: &str = "success";
pub const STATUS_MESSAGE: &str = "Report function is healthy";

/// Envelope handed back to the invoking platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Value>,
    pub body: String,
}

impl HandlerResponse {
    pub fn ok_text(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            headers: None,
            body: body.into(),
        }
    }

    pub fn ok_json(payload: impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code: 200,
            headers: Some(json!({"Content-Type": "application/json"})),
            body: serde_json::to_string(&payload)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBody {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}
