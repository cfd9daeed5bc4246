use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use report_core::contract::HandlerResponse;
use report_lambda::adapters::s3::S3ReportStore;
use report_lambda::config::ReportStoreConfig;
use report_lambda::handlers::daily_report::handle_daily_report;
use report_lambda::logging::log_info;
use serde_json::{json, Value};

async fn handle_request(event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    log_info(
        "daily_report_lambda",
        "invocation_received",
        json!({ "request_id": event.context.request_id }),
    );

    let config = ReportStoreConfig::from_env()?;
    let now = Utc::now();
    let store = S3ReportStore::from_default_aws_config(config.bucket.clone()).await;

    Ok(handle_daily_report(&config, now, &store)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
