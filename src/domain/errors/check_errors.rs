use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

use super::{StorageError, StorageErrorKind, ValidationError};

/// Local filesystem failure while checking or writing the destination file
#[derive(ThisError, Debug)]
#[error("Local I/O error during {operation} of {}: {source}", .path.display())]
pub struct LocalIoError {
    pub path: PathBuf,
    pub operation: &'static str,
    #[source]
    pub source: io::Error,
}

impl LocalIoError {
    pub fn new(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self {
            path: path.into(),
            operation,
            source,
        }
    }
}

/// Every way a single restore check can fail; all of them are fatal
#[derive(ThisError, Debug)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(StorageError),

    #[error("Backend error: {0}")]
    Backend(StorageError),

    #[error(transparent)]
    LocalIo(#[from] LocalIoError),
}

impl From<StorageError> for CheckError {
    fn from(err: StorageError) -> Self {
        match err.kind() {
            StorageErrorKind::NotFound => CheckError::NotFound(err),
            StorageErrorKind::Backend => CheckError::Backend(err),
        }
    }
}

/// Result type for a restore check
pub type CheckResult<T> = Result<T, CheckError>;
