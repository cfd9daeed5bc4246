use chrono::{DateTime, Utc};
use report_core::contract::HandlerResponse;
use report_core::report::text_report_body;
use report_core::storage_keys::ReportKind;

use crate::adapters::object_store::ReportStore;
use crate::config::ReportStoreConfig;
use crate::handlers::{upload_report, HandlerError};

const COMPONENT: &str = "text_report_handler";

pub fn handle_text_report(
    config: &ReportStoreConfig,
    now: DateTime<Utc>,
    store: &impl ReportStore,
) -> Result<HandlerResponse, HandlerError> {
    let body = text_report_body(now);
    let key = upload_report(COMPONENT, ReportKind::Text, &body, config, now, store)?;

    Ok(HandlerResponse::ok_text(format!("Report uploaded: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{fixed_now, sample_config, FailingStore, RecordingStore};

    #[test]
    fn uploads_timestamped_text_report() {
        let store = RecordingStore::new();
        let response = handle_text_report(&sample_config(), fixed_now(), &store)
            .expect("text report should succeed");

        assert_eq!(store.keys(), vec!["report_20260214_090503.txt"]);
        assert_eq!(
            store.content_type("report_20260214_090503.txt").as_deref(),
            Some("text/plain; charset=utf-8")
        );
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "Report uploaded: report_20260214_090503.txt");

        let body = String::from_utf8(
            store
                .body("report_20260214_090503.txt")
                .expect("report body should be written"),
        )
        .expect("body should be UTF-8");
        let stamp = body
            .trim_end()
            .rsplit(' ')
            .next()
            .expect("body should end with a timestamp");
        let parsed = DateTime::parse_from_rfc3339(stamp).expect("timestamp should parse");
        assert_eq!(parsed.with_timezone(&Utc), fixed_now());
    }

    #[test]
    fn propagates_store_failure() {
        let error = handle_text_report(&sample_config(), fixed_now(), &FailingStore)
            .expect_err("store failure should fail the invocation");

        assert!(error.message.contains("report_20260214_090503.txt"));
    }
}
