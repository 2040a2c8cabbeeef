use super::metadata::{RawObjectMetadata, RestoreStatus, StorageClass};

/// Read-only snapshot of one object's retrievability, taken at stat time.
///
/// `is_restoring` and `is_restored` are never both set, and both are clear
/// whenever `is_archived` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStatus {
    is_archived: bool,
    is_restoring: bool,
    is_restored: bool,
    size: u64,
    storage_class: StorageClass,
    restore_expiry: Option<String>,
}

impl ObjectStatus {
    /// Classify raw backend metadata
    pub fn from_metadata(metadata: &RawObjectMetadata) -> Self {
        let storage_class = metadata.storage_class();
        let is_archived = storage_class.requires_restore();

        let (is_restoring, is_restored, restore_expiry) = match metadata.restore_status() {
            Some(RestoreStatus::InProgress) if is_archived => (true, false, None),
            Some(RestoreStatus::Completed { expiry }) if is_archived => (false, true, expiry),
            _ => (false, false, None),
        };

        Self {
            is_archived,
            is_restoring,
            is_restored,
            size: metadata.content_length,
            storage_class,
            restore_expiry,
        }
    }

    /// Status of a plain, directly readable object
    pub fn available(size: u64) -> Self {
        Self {
            is_archived: false,
            is_restoring: false,
            is_restored: false,
            size,
            storage_class: StorageClass::Standard,
            restore_expiry: None,
        }
    }

    /// Status of an archived object with no restore requested yet
    pub fn archived(size: u64) -> Self {
        Self {
            is_archived: true,
            is_restoring: false,
            is_restored: false,
            size,
            storage_class: StorageClass::Glacier,
            restore_expiry: None,
        }
    }

    /// Status of an archived object with a restore still running
    pub fn restoring(size: u64) -> Self {
        Self {
            is_restoring: true,
            ..Self::archived(size)
        }
    }

    /// Status of an archived object whose temporary copy is readable
    pub fn restored(size: u64) -> Self {
        Self {
            is_restored: true,
            ..Self::archived(size)
        }
    }

    pub fn is_archived(&self) -> bool {
        self.is_archived
    }

    pub fn is_restoring(&self) -> bool {
        self.is_restoring
    }

    pub fn is_restored(&self) -> bool {
        self.is_restored
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn storage_class(&self) -> &StorageClass {
        &self.storage_class
    }

    pub fn restore_expiry(&self) -> Option<&str> {
        self.restore_expiry.as_deref()
    }
}
