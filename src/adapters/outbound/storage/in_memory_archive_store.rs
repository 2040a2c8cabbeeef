use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::{RawObjectMetadata, RestoreTier, StorageClass},
        value_objects::{BucketName, ObjectLocation, RetentionDays},
    },
    ports::storage::{ArchiveStore, ObjectBody},
};

/// Restore job recorded by the in-memory store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreCall {
    pub location: ObjectLocation,
    pub tier: RestoreTier,
    pub days: RetentionDays,
}

/// Operations whose next invocation can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePoint {
    Stat,
    Get,
    Restore,
}

/// In-memory implementation of ArchiveStore for testing and development.
///
/// Models the archive lifecycle of S3: archived objects refuse GET until a
/// restore has been requested and then completed with [`complete_restore`].
///
/// [`complete_restore`]: InMemoryArchiveStore::complete_restore
#[derive(Clone, Default)]
pub struct InMemoryArchiveStore {
    data: Arc<RwLock<StoreData>>,
}

#[derive(Default)]
struct StoreData {
    buckets: HashSet<BucketName>,
    objects: HashMap<ObjectLocation, StoredObject>,
    restore_calls: Vec<RestoreCall>,
    get_calls: usize,
    failures: HashMap<FailurePoint, StorageError>,
}

#[derive(Clone)]
struct StoredObject {
    data: Bytes,
    storage_class: StorageClass,
    restore: RestoreState,
    chunk_size: usize,
    body_failure: Option<(usize, StorageError)>,
}

#[derive(Clone, Debug, PartialEq)]
enum RestoreState {
    NotRequested,
    Ongoing,
    Completed { expiry: String },
}

const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;
const RESTORE_EXPIRY: &str = "Fri, 21 Dec 2012 00:00:00 GMT";

impl InMemoryArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty bucket
    pub async fn create_bucket(&self, bucket: BucketName) {
        self.data.write().await.buckets.insert(bucket);
    }

    /// Store an object in the given storage class, creating its bucket
    pub async fn put_object(
        &self,
        location: &ObjectLocation,
        data: impl Into<Bytes>,
        storage_class: StorageClass,
    ) {
        let mut store = self.data.write().await;
        store.buckets.insert(location.bucket.clone());
        store.objects.insert(
            location.clone(),
            StoredObject {
                data: data.into(),
                storage_class,
                restore: RestoreState::NotRequested,
                chunk_size: DEFAULT_CHUNK_SIZE,
                body_failure: None,
            },
        );
    }

    /// Finish an outstanding restore so the object becomes readable
    pub async fn complete_restore(&self, location: &ObjectLocation) -> StorageResult<()> {
        let mut store = self.data.write().await;
        let object = store
            .objects
            .get_mut(location)
            .ok_or_else(|| StorageError::ObjectNotFound {
                location: location.clone(),
            })?;
        if object.restore != RestoreState::Ongoing {
            return Err(StorageError::InvalidObjectState {
                location: location.clone(),
                operation: "complete restore".to_string(),
            });
        }
        object.restore = RestoreState::Completed {
            expiry: RESTORE_EXPIRY.to_string(),
        };
        Ok(())
    }

    /// Mark a restore as already running, as if another client had asked
    pub async fn start_restore(&self, location: &ObjectLocation) -> StorageResult<()> {
        let mut store = self.data.write().await;
        let object = store
            .objects
            .get_mut(location)
            .ok_or_else(|| StorageError::ObjectNotFound {
                location: location.clone(),
            })?;
        object.restore = RestoreState::Ongoing;
        Ok(())
    }

    /// Make the next call of `point` fail with `error`
    pub async fn fail_next(&self, point: FailurePoint, error: StorageError) {
        self.data.write().await.failures.insert(point, error);
    }

    /// Break the body of an object after `chunks` chunks of `chunk_size` bytes
    pub async fn interrupt_body(
        &self,
        location: &ObjectLocation,
        chunk_size: usize,
        chunks: usize,
        error: StorageError,
    ) {
        if let Some(object) = self.data.write().await.objects.get_mut(location) {
            object.chunk_size = chunk_size.max(1);
            object.body_failure = Some((chunks, error));
        }
    }

    /// Restore requests accepted so far, oldest first
    pub async fn restore_calls(&self) -> Vec<RestoreCall> {
        self.data.read().await.restore_calls.clone()
    }

    /// Number of GET calls that returned a body
    pub async fn get_calls(&self) -> usize {
        self.data.read().await.get_calls
    }

    fn lookup<'a>(
        store: &'a StoreData,
        location: &ObjectLocation,
    ) -> StorageResult<&'a StoredObject> {
        if !store.buckets.contains(&location.bucket) {
            return Err(StorageError::BucketNotFound {
                bucket: location.bucket.clone(),
            });
        }
        store
            .objects
            .get(location)
            .ok_or_else(|| StorageError::ObjectNotFound {
                location: location.clone(),
            })
    }
}

#[async_trait]
impl ArchiveStore for InMemoryArchiveStore {
    async fn stat_object(&self, location: &ObjectLocation) -> StorageResult<RawObjectMetadata> {
        let mut store = self.data.write().await;
        if let Some(error) = store.failures.remove(&FailurePoint::Stat) {
            return Err(error);
        }
        let object = Self::lookup(&store, location)?;

        let restore = match &object.restore {
            RestoreState::NotRequested => None,
            RestoreState::Ongoing => Some("ongoing-request=\"true\"".to_string()),
            RestoreState::Completed { expiry } => Some(format!(
                "ongoing-request=\"false\", expiry-date=\"{}\"",
                expiry
            )),
        };

        Ok(RawObjectMetadata {
            storage_class: Some(object.storage_class.as_str().to_string()),
            restore,
            content_length: object.data.len() as u64,
            last_modified: None,
            etag: None,
        })
    }

    async fn get_object(&self, location: &ObjectLocation) -> StorageResult<ObjectBody> {
        let mut store = self.data.write().await;
        if let Some(error) = store.failures.remove(&FailurePoint::Get) {
            return Err(error);
        }
        let object = Self::lookup(&store, location)?.clone();

        let readable = !object.storage_class.requires_restore()
            || matches!(object.restore, RestoreState::Completed { .. });
        if !readable {
            return Err(StorageError::InvalidObjectState {
                location: location.clone(),
                operation: "get".to_string(),
            });
        }
        store.get_calls += 1;

        let mut chunks: Vec<StorageResult<Bytes>> = object
            .data
            .chunks(object.chunk_size)
            .map(|chunk| Ok(object.data.slice_ref(chunk)))
            .collect();
        if let Some((after, error)) = object.body_failure {
            chunks.truncate(after);
            chunks.push(Err(error));
        }

        Ok(Box::pin(stream::iter(chunks)))
    }

    async fn restore_object(
        &self,
        location: &ObjectLocation,
        tier: RestoreTier,
        days: RetentionDays,
    ) -> StorageResult<()> {
        let mut store = self.data.write().await;
        if let Some(error) = store.failures.remove(&FailurePoint::Restore) {
            return Err(error);
        }
        let object = Self::lookup(&store, location)?;

        if !object.storage_class.requires_restore() {
            return Err(match object.storage_class {
                StorageClass::IntelligentTiering => StorageError::ObjectAlreadyInActiveTier {
                    location: location.clone(),
                },
                _ => StorageError::InvalidObjectState {
                    location: location.clone(),
                    operation: "restore".to_string(),
                },
            });
        }
        if object.restore == RestoreState::Ongoing {
            return Err(StorageError::RestoreAlreadyInProgress {
                location: location.clone(),
            });
        }

        if let Some(object) = store.objects.get_mut(location) {
            // A completed copy keeps serving reads; S3 only extends its expiry
            if object.restore == RestoreState::NotRequested {
                object.restore = RestoreState::Ongoing;
            }
        }
        store.restore_calls.push(RestoreCall {
            location: location.clone(),
            tier,
            days,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ObjectKey;
    use futures::TryStreamExt;

    fn location(key: &str) -> ObjectLocation {
        ObjectLocation::new(
            BucketName::new("test-bucket".to_string()).unwrap(),
            ObjectKey::new(key.to_string()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_missing_bucket_and_key() {
        let store = InMemoryArchiveStore::new();
        assert!(matches!(
            store.stat_object(&location("a.txt")).await,
            Err(StorageError::BucketNotFound { .. })
        ));

        store
            .create_bucket(BucketName::new("test-bucket".to_string()).unwrap())
            .await;
        assert!(matches!(
            store.stat_object(&location("a.txt")).await,
            Err(StorageError::ObjectNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_archive_lifecycle() {
        let store = InMemoryArchiveStore::new();
        let loc = location("cold.bin");
        store.put_object(&loc, "frozen", StorageClass::Glacier).await;

        assert!(store.stat_object(&loc).await.unwrap().restore.is_none());
        assert!(matches!(
            store.get_object(&loc).await,
            Err(StorageError::InvalidObjectState { .. })
        ));

        store
            .restore_object(&loc, RestoreTier::Bulk, RetentionDays::new(2).unwrap())
            .await
            .unwrap();
        assert_eq!(
            store.stat_object(&loc).await.unwrap().restore.as_deref(),
            Some("ongoing-request=\"true\"")
        );
        assert!(matches!(
            store
                .restore_object(&loc, RestoreTier::Bulk, RetentionDays::new(2).unwrap())
                .await,
            Err(StorageError::RestoreAlreadyInProgress { .. })
        ));

        store.complete_restore(&loc).await.unwrap();
        let body: Vec<Bytes> = store
            .get_object(&loc)
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        assert_eq!(body.concat(), b"frozen".to_vec());
        assert_eq!(store.restore_calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_restore_of_hot_object_rejected() {
        let store = InMemoryArchiveStore::new();
        let loc = location("hot.bin");
        store.put_object(&loc, "warm", StorageClass::Standard).await;

        assert!(matches!(
            store
                .restore_object(&loc, RestoreTier::Standard, RetentionDays::default())
                .await,
            Err(StorageError::InvalidObjectState { .. })
        ));
        assert!(store.restore_calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure_fires_once() {
        let store = InMemoryArchiveStore::new();
        let loc = location("flaky.bin");
        store.put_object(&loc, "data", StorageClass::Standard).await;
        store
            .fail_next(FailurePoint::Stat, StorageError::backend("HeadObject", "throttled"))
            .await;

        assert!(store.stat_object(&loc).await.is_err());
        assert!(store.stat_object(&loc).await.is_ok());
    }
}
