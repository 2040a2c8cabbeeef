use super::{BucketName, ObjectKey};

/// Fully qualified handle of one object: the bucket plus the key inside it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    pub bucket: BucketName,
    pub key: ObjectKey,
}

impl ObjectLocation {
    pub fn new(bucket: BucketName, key: ObjectKey) -> Self {
        Self { bucket, key }
    }
}

impl std::fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_as_uri() {
        let location = ObjectLocation::new(
            BucketName::new("archive-bucket".to_string()).unwrap(),
            ObjectKey::new("2024/01/dump.tar.gz".to_string()).unwrap(),
        );
        assert_eq!(location.to_string(), "s3://archive-bucket/2024/01/dump.tar.gz");
    }
}
