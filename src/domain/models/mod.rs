pub mod action;
pub mod metadata;
pub mod request;
pub mod status;

pub use action::{Action, Outcome, RestoreRequestSpec, RestoreTier, SkipReason};
pub use metadata::{RawObjectMetadata, RestoreStatus, StorageClass};
pub use request::{CheckRequest, DecisionPolicy};
pub use status::ObjectStatus;
