use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::debug;

use super::{ContentError, ContentStore};
use crate::config::S3Settings;

/// Reads documents from an S3 bucket (MinIO locally, AWS in production).
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds a client from static credentials and a custom endpoint.
    pub async fn connect(settings: &S3Settings) -> Self {
        let credentials = Credentials::new(
            &settings.access_key_id,
            &settings.secret_access_key,
            None,
            None,
            "darkroom-static",
        );

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&settings.endpoint)
            .load()
            .await;

        Self::new(Client::new(&s3_config), settings.bucket.clone())
    }
}

#[async_trait]
impl ContentStore for S3Store {
    async fn get(&self, key: &str) -> Result<Option<Bytes>, ContentError> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match result {
            Ok(output) => {
                let body = output.body.collect().await.map_err(|e| {
                    ContentError::S3(format!("reading s3://{}/{key} failed: {e}", self.bucket))
                })?;
                Ok(Some(body.into_bytes()))
            }
            Err(err) => match err.into_service_error() {
                GetObjectError::NoSuchKey(_) => {
                    debug!("No object at s3://{}/{key}", self.bucket);
                    Ok(None)
                }
                other => Err(ContentError::S3(format!(
                    "GetObject s3://{}/{key} failed: {other}",
                    self.bucket
                ))),
            },
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, ContentError> {
        let mut keys = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let page = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|e| {
                    ContentError::S3(format!(
                        "ListObjectsV2 s3://{}/{prefix} failed: {e}",
                        self.bucket
                    ))
                })?;

            keys.extend(
                page.contents()
                    .iter()
                    .filter_map(|object| object.key())
                    .map(str::to_string),
            );

            match page.next_continuation_token() {
                Some(token) if page.is_truncated().unwrap_or(false) => {
                    continuation = Some(token.to_string());
                }
                _ => break,
            }
        }

        keys.sort();
        Ok(keys)
    }
}
