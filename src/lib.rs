pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    // Models
    Action,
    // Value objects
    BucketName,
    // Errors
    CheckError,
    CheckRequest,
    DecisionPolicy,
    DomainValidationError,
    LocalIoError,
    ObjectKey,
    ObjectLocation,
    ObjectStatus,
    Outcome,
    RawObjectMetadata,
    RestoreRequestSpec,
    RestoreStatus,
    RestoreTier,
    RetentionDays,
    SkipReason,
    StorageClass,
    StorageError,
    StorageErrorKind,
};

// Port types - interfaces for external systems
pub use ports::{
    // Storage ports
    ArchiveStore,
    ObjectBody,
    // Service ports
    RestoreCheckService,
};

// Service implementations - business logic
pub use services::{decide, ActionExecutor, ObjectProbe, RestoreCheckServiceImpl};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppError, AppServices, CheckConfig, StorageBackend,
    create_in_memory_app, run_check,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{InMemoryArchiveStore, S3ArchiveStore, S3Config};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, ArchiveStore, BucketName, CheckConfig, CheckRequest,
        InMemoryArchiveStore, ObjectKey, ObjectLocation, Outcome, RestoreCheckService,
        RestoreCheckServiceImpl, S3ArchiveStore, S3Config, create_in_memory_app, decide,
        run_check,
    };
}
