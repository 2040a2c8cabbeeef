// Infrastructure error mapping
pub mod error;

// Storage implementations
pub mod in_memory_archive_store;
pub mod s3;

// Re-export key types
pub use error::{classify_error_code, classify_sdk_error, S3Operation};
pub use in_memory_archive_store::{FailurePoint, InMemoryArchiveStore, RestoreCall};
pub use s3::{create_s3_client, S3ArchiveStore, S3Config};
