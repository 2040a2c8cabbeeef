pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use services::RestoreCheckService;
pub use storage::{ArchiveStore, ObjectBody};
