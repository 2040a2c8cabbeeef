mod archive_store;

pub use archive_store::{ArchiveStore, ObjectBody};
