use chrono::{DateTime, Utc};
use report_core::contract::HandlerResponse;
use report_core::report::daily_report_body;
use report_core::storage_keys::ReportKind;

use crate::adapters::object_store::ReportStore;
use crate::config::ReportStoreConfig;
use crate::handlers::{upload_report, HandlerError};

const COMPONENT: &str = "daily_report_handler";

pub fn handle_daily_report(
    config: &ReportStoreConfig,
    now: DateTime<Utc>,
    store: &impl ReportStore,
) -> Result<HandlerResponse, HandlerError> {
    let body = daily_report_body().map_err(HandlerError::new)?;
    let key = upload_report(COMPONENT, ReportKind::DailyCsv, &body, config, now, store)?;

    Ok(HandlerResponse::ok_text(format!("Report generated: {key}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{fixed_now, sample_config, FailingStore, RecordingStore};

    #[test]
    fn uploads_fixed_csv_under_timestamped_key() {
        let store = RecordingStore::new();
        let response = handle_daily_report(&sample_config(), fixed_now(), &store)
            .expect("daily report should succeed");

        assert_eq!(store.keys(), vec!["daily_report_20260214_090503.csv"]);
        let body = store
            .body("daily_report_20260214_090503.csv")
            .expect("report body should be written");
        assert_eq!(
            body,
            b"Product,Sales,Inventory\nProduct A,1000,250\nProduct B,1500,180\n"
        );
        assert_eq!(
            store.content_type("daily_report_20260214_090503.csv").as_deref(),
            Some("text/csv")
        );

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            "Report generated: daily_report_20260214_090503.csv"
        );
    }

    #[test]
    fn prefixes_key_when_configured() {
        let store = RecordingStore::new();
        let config = ReportStoreConfig {
            prefix: "reports/".to_string(),
            ..sample_config()
        };

        handle_daily_report(&config, fixed_now(), &store).expect("daily report should succeed");

        assert_eq!(store.keys(), vec!["reports/daily_report_20260214_090503.csv"]);
    }

    #[test]
    fn propagates_store_failure() {
        let error = handle_daily_report(&sample_config(), fixed_now(), &FailingStore)
            .expect_err("store failure should fail the invocation");

        assert_eq!(
            error.message,
            "simulated write failure for key: daily_report_20260214_090503.csv"
        );
    }
}
