use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    domain::{
        errors::StorageResult,
        models::{ObjectStatus, RestoreStatus},
        value_objects::ObjectLocation,
    },
    ports::storage::ArchiveStore,
};

/// Turns one backend stat call into an [`ObjectStatus`]
#[derive(Clone)]
pub struct ObjectProbe {
    store: Arc<dyn ArchiveStore>,
}

impl ObjectProbe {
    pub fn new(store: Arc<dyn ArchiveStore>) -> Self {
        Self { store }
    }

    pub async fn probe(&self, location: &ObjectLocation) -> StorageResult<ObjectStatus> {
        info!("Head: {}", location);

        let metadata = self.store.stat_object(location).await?;
        debug!(?metadata, "Raw object metadata");

        if let Some(RestoreStatus::Unrecognized(raw)) = metadata.restore_status() {
            warn!(restore = %raw, "Unrecognized restore status, treating as no restore");
        }

        let status = ObjectStatus::from_metadata(&metadata);
        info!(
            storage_class = %status.storage_class(),
            archived = status.is_archived(),
            restoring = status.is_restoring(),
            restored = status.is_restored(),
            size = status.size(),
            "Object status for {}",
            location
        );
        if let Some(expiry) = status.restore_expiry() {
            info!("Restored copy expires {}", expiry);
        }

        Ok(status)
    }
}
