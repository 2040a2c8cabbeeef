use std::path::PathBuf;

use super::action::RestoreRequestSpec;
use crate::domain::value_objects::ObjectLocation;

/// The part of the configuration the decision engine consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecisionPolicy {
    /// Gate for ever issuing a restore
    pub restore_enabled: bool,
    /// Whether a local file of the same name may be replaced
    pub overwrite_enabled: bool,
    pub restore: RestoreRequestSpec,
}

/// One restore check: which object, where it lands locally, and the policy
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub location: ObjectLocation,
    pub output_dir: PathBuf,
    pub policy: DecisionPolicy,
}

impl CheckRequest {
    /// Local path named after the final segment of the object key
    pub fn destination(&self) -> PathBuf {
        self.output_dir.join(self.location.key.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BucketName, ObjectKey};
    use std::path::Path;

    #[test]
    fn test_destination_uses_last_key_segment() {
        let request = CheckRequest {
            location: ObjectLocation::new(
                BucketName::new("backups".to_string()).unwrap(),
                ObjectKey::new("db/2024-01-01/dump.sql.gz".to_string()).unwrap(),
            ),
            output_dir: PathBuf::from("/var/restore"),
            policy: DecisionPolicy::default(),
        };
        assert_eq!(request.destination(), Path::new("/var/restore/dump.sql.gz"));
    }
}
