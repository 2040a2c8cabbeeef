use crate::domain::errors::ValidationError;

/// A validated bucket name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketName(String);

impl BucketName {
    /// Longest name S3 has ever accepted (legacy us-east-1 buckets)
    pub const MAX_LEN: usize = 255;

    /// Create a new BucketName.
    ///
    /// Only names of existing buckets are ever addressed, so the legacy
    /// us-east-1 rules apply: uppercase letters and underscores are allowed
    /// alongside the modern lowercase, digit, dot and hyphen set.
    pub fn new(value: String) -> Result<Self, ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }

        if value.len() > Self::MAX_LEN {
            return Err(ValidationError::BucketNameTooLong {
                actual: value.len(),
                max: Self::MAX_LEN,
            });
        }

        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')))
        {
            return Err(ValidationError::BucketNameInvalidCharacter(c));
        }

        Ok(Self(value))
    }

    /// Get the bucket name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BucketName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bucket_names() {
        assert!(BucketName::new("my-bucket".to_string()).is_ok());
        assert!(BucketName::new("bucket123".to_string()).is_ok());
        assert!(BucketName::new("logs.example.com".to_string()).is_ok());
    }

    #[test]
    fn test_legacy_bucket_names_are_accepted() {
        assert!(BucketName::new("My_Legacy_Bucket".to_string()).is_ok());
        assert!(BucketName::new("ab".to_string()).is_ok());
        assert!(BucketName::new("a".repeat(200)).is_ok());
    }

    #[test]
    fn test_invalid_bucket_names() {
        assert_eq!(
            BucketName::new(String::new()),
            Err(ValidationError::EmptyBucketName)
        );
        assert!(matches!(
            BucketName::new("a".repeat(256)),
            Err(ValidationError::BucketNameTooLong { actual: 256, max: 255 })
        ));
        assert_eq!(
            BucketName::new("my bucket".to_string()),
            Err(ValidationError::BucketNameInvalidCharacter(' '))
        );
        assert_eq!(
            BucketName::new("bucket/key".to_string()),
            Err(ValidationError::BucketNameInvalidCharacter('/'))
        );
    }
}
