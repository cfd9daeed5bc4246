//! Environment-driven configuration for the report uploads.
//!
//! Only the bucket is required. The prefix defaults to empty so object keys
//! are the bare report file names.

pub const REPORTS_BUCKET_ENV: &str = "REPORTS_BUCKET";
pub const REPORTS_PREFIX_ENV: &str = "REPORTS_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStoreConfig {
    pub bucket: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}

impl ReportStoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bucket = lookup(REPORTS_BUCKET_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ConfigError::new(format!("{REPORTS_BUCKET_ENV} must be configured"))
            })?;
        let prefix = lookup(REPORTS_PREFIX_ENV)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();

        Ok(Self { bucket, prefix })
    }
}
