use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::domain::{errors::StorageError, value_objects::ObjectLocation};

/// S3 calls the adapter makes; bare HTTP statuses mean different things per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum S3Operation {
    HeadObject,
    GetObject,
    RestoreObject,
}

impl S3Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            S3Operation::HeadObject => "HeadObject",
            S3Operation::GetObject => "GetObject",
            S3Operation::RestoreObject => "RestoreObject",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            S3Operation::HeadObject => "head",
            S3Operation::GetObject => "get",
            S3Operation::RestoreObject => "restore",
        }
    }
}

impl std::fmt::Display for S3Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert an SDK failure into the domain taxonomy
pub fn classify_sdk_error<E>(
    err: &SdkError<E>,
    operation: S3Operation,
    location: &ObjectLocation,
) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let code = err.as_service_error().and_then(|service| service.code());
    let status = err.raw_response().map(|response| response.status().as_u16());
    let message = DisplayErrorContext(err).to_string();
    classify_error_code(code, status, operation, location, message)
}

/// Map an S3 error code (or, for bodiless HEAD responses, the HTTP status)
/// onto a `StorageError`
pub fn classify_error_code(
    code: Option<&str>,
    status: Option<u16>,
    operation: S3Operation,
    location: &ObjectLocation,
    message: String,
) -> StorageError {
    let is_head = operation == S3Operation::HeadObject;
    match (code, status) {
        (Some("NoSuchBucket"), _) => StorageError::BucketNotFound {
            bucket: location.bucket.clone(),
        },
        (Some("NoSuchKey"), _) => StorageError::ObjectNotFound {
            location: location.clone(),
        },
        // HEAD responses carry no body, so only the status survives
        (Some("BadRequest"), _) | (None, Some(400)) if is_head => StorageError::BucketNotFound {
            bucket: location.bucket.clone(),
        },
        (Some("NotFound"), _) | (None, Some(404)) if is_head => StorageError::ObjectNotFound {
            location: location.clone(),
        },
        (Some("ObjectAlreadyInActiveTierError"), _) => StorageError::ObjectAlreadyInActiveTier {
            location: location.clone(),
        },
        (Some("InvalidObjectState"), _) => StorageError::InvalidObjectState {
            location: location.clone(),
            operation: operation.verb().to_string(),
        },
        (Some("RestoreAlreadyInProgress"), _) => StorageError::RestoreAlreadyInProgress {
            location: location.clone(),
        },
        (Some(code), _) => StorageError::backend(operation.as_str(), format!("{}: {}", code, message)),
        (None, _) => StorageError::backend(operation.as_str(), message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BucketName, ObjectKey};

    fn location() -> ObjectLocation {
        ObjectLocation::new(
            BucketName::new("cold-storage".to_string()).unwrap(),
            ObjectKey::new("backups/db.tar".to_string()).unwrap(),
        )
    }

    fn classify(code: Option<&str>, status: Option<u16>, operation: S3Operation) -> StorageError {
        classify_error_code(code, status, operation, &location(), "boom".to_string())
    }

    #[test]
    fn test_head_statuses() {
        assert!(matches!(
            classify(None, Some(404), S3Operation::HeadObject),
            StorageError::ObjectNotFound { .. }
        ));
        assert!(matches!(
            classify(Some("NotFound"), Some(404), S3Operation::HeadObject),
            StorageError::ObjectNotFound { .. }
        ));
        assert!(matches!(
            classify(Some("BadRequest"), Some(400), S3Operation::HeadObject),
            StorageError::BucketNotFound { .. }
        ));
    }

    #[test]
    fn test_bare_statuses_outside_head_are_backend_errors() {
        assert!(matches!(
            classify(None, Some(404), S3Operation::GetObject),
            StorageError::BackendError { .. }
        ));
    }

    #[test]
    fn test_restore_codes() {
        assert!(matches!(
            classify(Some("ObjectAlreadyInActiveTierError"), Some(403), S3Operation::RestoreObject),
            StorageError::ObjectAlreadyInActiveTier { .. }
        ));
        assert_eq!(
            classify(Some("InvalidObjectState"), Some(403), S3Operation::RestoreObject),
            StorageError::InvalidObjectState {
                location: location(),
                operation: "restore".to_string(),
            }
        );
        assert!(matches!(
            classify(Some("RestoreAlreadyInProgress"), Some(409), S3Operation::RestoreObject),
            StorageError::RestoreAlreadyInProgress { .. }
        ));
    }

    #[test]
    fn test_missing_bucket_and_key_codes() {
        assert!(matches!(
            classify(Some("NoSuchBucket"), Some(404), S3Operation::GetObject),
            StorageError::BucketNotFound { .. }
        ));
        assert!(matches!(
            classify(Some("NoSuchKey"), Some(404), S3Operation::RestoreObject),
            StorageError::ObjectNotFound { .. }
        ));
    }

    #[test]
    fn test_unknown_code_keeps_code_in_message() {
        match classify(Some("AccessDenied"), Some(403), S3Operation::GetObject) {
            StorageError::BackendError { operation, message } => {
                assert_eq!(operation, "GetObject");
                assert!(message.starts_with("AccessDenied"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
