use crate::domain::value_objects::{BucketName, ObjectLocation};

/// Coarse classification used to pick the process-level error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    NotFound,
    Backend,
}

/// Errors produced by the storage backend adapters
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// Bucket does not exist
    BucketNotFound { bucket: BucketName },

    /// Key does not exist in the bucket
    ObjectNotFound { location: ObjectLocation },

    /// Restore requested for an object that is already readable
    ObjectAlreadyInActiveTier { location: ObjectLocation },

    /// Operation not valid for the object's storage class or restore state
    InvalidObjectState {
        location: ObjectLocation,
        operation: String,
    },

    /// Another restore request for this object is still running
    RestoreAlreadyInProgress { location: ObjectLocation },

    /// Any other transport, auth or service failure
    BackendError { operation: String, message: String },
}

impl StorageError {
    pub fn kind(&self) -> StorageErrorKind {
        match self {
            StorageError::BucketNotFound { .. } | StorageError::ObjectNotFound { .. } => {
                StorageErrorKind::NotFound
            }
            StorageError::ObjectAlreadyInActiveTier { .. }
            | StorageError::InvalidObjectState { .. }
            | StorageError::RestoreAlreadyInProgress { .. }
            | StorageError::BackendError { .. } => StorageErrorKind::Backend,
        }
    }

    pub fn backend(operation: impl Into<String>, message: impl Into<String>) -> Self {
        StorageError::BackendError {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::BucketNotFound { bucket } => {
                write!(f, "Bucket does not exist: {}", bucket)
            }
            StorageError::ObjectNotFound { location } => {
                write!(f, "Key does not exist: {}", location)
            }
            StorageError::ObjectAlreadyInActiveTier { location } => {
                write!(f, "Object already restored: {}", location)
            }
            StorageError::InvalidObjectState {
                location,
                operation,
            } => {
                write!(
                    f,
                    "Inappropriate storage class for {}: {}",
                    operation, location
                )
            }
            StorageError::RestoreAlreadyInProgress { location } => {
                write!(f, "Restore already in progress: {}", location)
            }
            StorageError::BackendError { operation, message } => {
                write!(f, "Storage backend error during {}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
