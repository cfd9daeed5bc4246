use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    DailyCsv,
    Text,
}

impl ReportKind {
    fn stem(self) -> &'static str {
        match self {
            Self::DailyCsv => "daily_report",
            Self::Text => "report",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::DailyCsv => "csv",
            Self::Text => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::DailyCsv => "text/csv",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

pub fn report_file_name(kind: ReportKind, now: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        kind.stem(),
        now.format("%Y%m%d_%H%M%S"),
        kind.extension(),
    )
}

pub fn report_object_key(base_prefix: &str, kind: ReportKind, now: DateTime<Utc>) -> String {
    let trimmed = base_prefix.trim().trim_matches('/');
    let file_name = report_file_name(kind, now);
    if trimmed.is_empty() {
        file_name
    } else {
        format!("{trimmed}/{file_name}")
    }
}
