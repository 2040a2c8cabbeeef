/// Validation errors for domain value objects
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // ObjectKey validation errors
    EmptyObjectKey,
    ObjectKeyTooLong {
        actual: usize,
        max: usize,
    },
    InvalidObjectKeyCharacter(char),
    ObjectKeyEndsWithSlash,
    ObjectKeyInvalidFileName(String),

    // BucketName validation errors
    EmptyBucketName,
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidCharacter(char),

    // Restore request validation errors
    InvalidRetentionDays {
        actual: u32,
        max: u32,
    },
    InvalidField {
        field: String,
        value: String,
        expected: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ObjectKey errors
            ValidationError::EmptyObjectKey => write!(f, "The key name cannot be blank"),
            ValidationError::ObjectKeyTooLong { actual, max } => {
                write!(f, "Object key too long: {} bytes (max: {})", actual, max)
            }
            ValidationError::InvalidObjectKeyCharacter(c) => {
                write!(f, "Invalid character in object key: {:?}", c)
            }
            ValidationError::ObjectKeyEndsWithSlash => {
                write!(f, "Object key must name an object, not end with '/'")
            }
            ValidationError::ObjectKeyInvalidFileName(name) => {
                write!(f, "Object key has no usable file name: '{}'", name)
            }

            // BucketName errors
            ValidationError::EmptyBucketName => write!(f, "The bucket name cannot be blank"),
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only letters, numbers, dots, hyphens and underscores allowed",
                    c
                )
            }

            // Restore request errors
            ValidationError::InvalidRetentionDays { actual, max } => {
                write!(
                    f,
                    "Restore days must be between 1 and {} (got {})",
                    max, actual
                )
            }
            ValidationError::InvalidField {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value for field '{}': '{}' (expected: {})",
                    field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
