use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::domain::{
    errors::StorageResult,
    models::{RawObjectMetadata, RestoreTier},
    value_objects::{ObjectLocation, RetentionDays},
};

/// Streamed object content, chunk by chunk
pub type ObjectBody = Pin<Box<dyn Stream<Item = StorageResult<Bytes>> + Send>>;

/// Port for a tiered object store that can restore archived objects.
/// Adapters are responsible for mapping backend failures onto `StorageError`.
#[async_trait]
pub trait ArchiveStore: Send + Sync + 'static {
    /// Fetch object metadata without its content
    async fn stat_object(&self, location: &ObjectLocation) -> StorageResult<RawObjectMetadata>;

    /// Open the object content for streaming
    async fn get_object(&self, location: &ObjectLocation) -> StorageResult<ObjectBody>;

    /// Ask the backend to make a temporary readable copy of an archived object
    async fn restore_object(
        &self,
        location: &ObjectLocation,
        tier: RestoreTier,
        days: RetentionDays,
    ) -> StorageResult<()>;
}
