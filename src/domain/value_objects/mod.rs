mod bucket_name;
mod object_key;
mod object_location;
mod retention_days;

pub use bucket_name::BucketName;
pub use object_key::ObjectKey;
pub use object_location::ObjectLocation;
pub use retention_days::RetentionDays;
