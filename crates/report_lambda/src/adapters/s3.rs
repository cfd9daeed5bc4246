use aws_sdk_s3::primitives::ByteStream;

use crate::adapters::object_store::ReportStore;

pub struct S3ReportStore {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl S3ReportStore {
    pub fn new(bucket: impl Into<String>, s3_client: aws_sdk_s3::Client) -> Self {
        Self {
            bucket: bucket.into(),
            s3_client,
        }
    }

    pub async fn from_default_aws_config(bucket: impl Into<String>) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(bucket, aws_sdk_s3::Client::new(&aws_config))
    }
}

impl ReportStore for S3ReportStore {
    // Requires the multi-threaded Tokio runtime started by the Lambda binaries.
    fn write_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let content_type = content_type.to_string();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .content_type(content_type)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to write report to s3: {error}"))
            })
        })
    }
}
