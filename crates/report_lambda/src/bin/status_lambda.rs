use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use report_core::contract::HandlerResponse;
use report_lambda::handlers::status::handle_status;
use report_lambda::logging::log_info;
use serde_json::{json, Value};

async fn handle_request(event: LambdaEvent<Value>) -> Result<HandlerResponse, Error> {
    log_info(
        "status_lambda",
        "invocation_received",
        json!({ "request_id": event.context.request_id }),
    );

    Ok(handle_status(Utc::now())?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
