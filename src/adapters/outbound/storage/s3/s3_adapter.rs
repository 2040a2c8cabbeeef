use async_trait::async_trait;
use aws_sdk_s3::{
    primitives::DateTime as SmithyDateTime,
    types::{GlacierJobParameters, RestoreRequest, Tier},
    Client,
};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use tokio_util::io::ReaderStream;

use super::{create_s3_client, S3Config};
use crate::{
    adapters::outbound::storage::error::{classify_sdk_error, S3Operation},
    domain::{
        errors::{StorageError, StorageResult},
        models::{RawObjectMetadata, RestoreTier},
        value_objects::{ObjectLocation, RetentionDays},
    },
    ports::storage::{ArchiveStore, ObjectBody},
};

/// S3 storage adapter that implements the ArchiveStore trait
#[derive(Clone, Debug)]
pub struct S3ArchiveStore {
    client: Client,
}

impl S3ArchiveStore {
    /// Create a new S3 adapter around an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the client from configuration and wrap it
    pub async fn from_config(config: &S3Config) -> Self {
        Self::new(create_s3_client(config).await)
    }

    fn to_sdk_tier(tier: RestoreTier) -> Tier {
        match tier {
            RestoreTier::Standard => Tier::Standard,
            RestoreTier::Bulk => Tier::Bulk,
            RestoreTier::Expedited => Tier::Expedited,
        }
    }

    fn to_chrono(timestamp: &SmithyDateTime) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
    }
}

#[async_trait]
impl ArchiveStore for S3ArchiveStore {
    async fn stat_object(&self, location: &ObjectLocation) -> StorageResult<RawObjectMetadata> {
        let output = self
            .client
            .head_object()
            .bucket(location.bucket.as_str())
            .key(location.key.as_str())
            .send()
            .await
            .map_err(|err| classify_sdk_error(&err, S3Operation::HeadObject, location))?;

        Ok(RawObjectMetadata {
            storage_class: output.storage_class().map(|class| class.as_str().to_string()),
            restore: output.restore().map(str::to_string),
            content_length: output
                .content_length()
                .and_then(|length| u64::try_from(length).ok())
                .unwrap_or(0),
            last_modified: output.last_modified().and_then(Self::to_chrono),
            etag: output.e_tag().map(str::to_string),
        })
    }

    async fn get_object(&self, location: &ObjectLocation) -> StorageResult<ObjectBody> {
        let output = self
            .client
            .get_object()
            .bucket(location.bucket.as_str())
            .key(location.key.as_str())
            .send()
            .await
            .map_err(|err| classify_sdk_error(&err, S3Operation::GetObject, location))?;

        let source = location.clone();
        let stream = ReaderStream::new(output.body.into_async_read()).map_err(move |err| {
            StorageError::backend(
                S3Operation::GetObject.as_str(),
                format!("reading body of {}: {}", source, err),
            )
        });

        Ok(Box::pin(stream))
    }

    async fn restore_object(
        &self,
        location: &ObjectLocation,
        tier: RestoreTier,
        days: RetentionDays,
    ) -> StorageResult<()> {
        let days = i32::try_from(days.get()).map_err(|_| {
            StorageError::backend(
                S3Operation::RestoreObject.as_str(),
                format!("restore days out of range: {}", days),
            )
        })?;

        let job_parameters = GlacierJobParameters::builder()
            .tier(Self::to_sdk_tier(tier))
            .build()
            .map_err(|err| {
                StorageError::backend(S3Operation::RestoreObject.as_str(), err.to_string())
            })?;

        let request = RestoreRequest::builder()
            .days(days)
            .glacier_job_parameters(job_parameters)
            .build();

        self.client
            .restore_object()
            .bucket(location.bucket.as_str())
            .key(location.key.as_str())
            .restore_request(request)
            .send()
            .await
            .map_err(|err| classify_sdk_error(&err, S3Operation::RestoreObject, location))?;

        Ok(())
    }
}
