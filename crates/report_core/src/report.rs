//! Report payload rendering.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::contract::{StatusBody, STATUS_MESSAGE, SUCCESS_STATUS};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InventoryRow<'a> {
    #[serde(rename = "Product")]
    pub product: &'a str,
    #[serde(rename = "Sales")]
    pub sales: u64,
    #[serde(rename = "Inventory")]
    pub inventory: u64,
}

pub const DAILY_INVENTORY: [InventoryRow<'static>; 2] = [
    InventoryRow {
        product: "Product A",
        sales: 1000,
        inventory: 250,
    },
    InventoryRow {
        product: "Product B",
        sales: 1500,
        inventory: 180,
    },
];

/// Renders rows as `\n`-terminated CSV with a header line.
pub fn render_inventory_csv(rows: &[InventoryRow<'_>]) -> Result<String, String> {
    if rows.is_empty() {
        return Err("Inventory report cannot be empty".to_string());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|error| format!("failed to serialize inventory row: {error}"))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| format!("failed to flush inventory csv: {error}"))?;
    String::from_utf8(bytes).map_err(|error| format!("inventory csv is not UTF-8: {error}"))
}

pub fn daily_report_body() -> Result<String, String> {
    render_inventory_csv(&DAILY_INVENTORY)
}

pub fn text_report_body(now: DateTime<Utc>) -> String {
    format!("Report generated at: {}\n", rfc3339_utc(now))
}

pub fn status_body(now: DateTime<Utc>) -> StatusBody {
    StatusBody {
        status: SUCCESS_STATUS.to_string(),
        message: STATUS_MESSAGE.to_string(),
        timestamp: rfc3339_utc(now),
    }
}

pub fn rfc3339_utc(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 14, 9, 5, 3)
            .single()
            .expect("fixed timestamp should be valid")
    }

    #[test]
    fn daily_report_matches_fixed_csv() {
        let body = daily_report_body().expect("daily report should render");
        assert_eq!(
            body,
            "Product,Sales,Inventory\nProduct A,1000,250\nProduct B,1500,180\n"
        );
    }

    #[test]
    fn rejects_empty_inventory() {
        let error = render_inventory_csv(&[]).expect_err("empty report should fail");
        assert_eq!(error, "Inventory report cannot be empty");
    }

    #[test]
    fn quotes_product_names_containing_commas() {
        let body = render_inventory_csv(&[InventoryRow {
            product: "Widget, large",
            sales: 3,
            inventory: 4,
        }])
        .expect("report should render");
        assert_eq!(body, "Product,Sales,Inventory\n\"Widget, large\",3,4\n");
    }

    #[test]
    fn text_report_embeds_parseable_utc_timestamp() {
        let body = text_report_body(fixed_now());
        assert_eq!(body, "Report generated at: 2026-02-14T09:05:03Z\n");

        let stamp = body
            .trim_end()
            .strip_prefix("Report generated at: ")
            .expect("prefix should be present");
        let parsed = DateTime::parse_from_rfc3339(stamp).expect("timestamp should parse");
        assert_eq!(parsed.with_timezone(&Utc), fixed_now());
    }

    #[test]
    fn status_body_reports_success() {
        let body = status_body(fixed_now());
        assert_eq!(body.status, "success");
        assert_eq!(body.timestamp, "2026-02-14T09:05:03Z");
    }
}
