use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{InMemoryArchiveStore, S3ArchiveStore, S3Config},
    domain::{
        errors::{CheckError, ValidationError},
        models::{CheckRequest, DecisionPolicy, Outcome, RestoreRequestSpec, RestoreTier},
        value_objects::{BucketName, ObjectKey, ObjectLocation, RetentionDays},
    },
    ports::{services::RestoreCheckService, storage::ArchiveStore},
    services::RestoreCheckServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    S3(S3Config),
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::S3(S3Config::default())
    }
}

/// What a single invocation should check, as given on the command line
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub bucket: String,
    pub key: String,
    pub restore_days: u32,
    pub restore_enabled: bool,
    pub overwrite_enabled: bool,
    pub tier: RestoreTier,
    pub output_dir: PathBuf,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            key: String::new(),
            restore_days: 1,
            restore_enabled: false,
            overwrite_enabled: false,
            tier: RestoreTier::Standard,
            output_dir: PathBuf::from("."),
        }
    }
}

impl CheckConfig {
    /// Validate the raw values into a check request
    pub fn to_request(&self) -> Result<CheckRequest, ValidationError> {
        let bucket = BucketName::new(self.bucket.trim().to_string())?;
        let key = ObjectKey::new(self.key.clone())?;
        let days = RetentionDays::new(self.restore_days)?;

        Ok(CheckRequest {
            location: ObjectLocation::new(bucket, key),
            output_dir: self.output_dir.clone(),
            policy: DecisionPolicy {
                restore_enabled: self.restore_enabled,
                overwrite_enabled: self.overwrite_enabled,
                restore: RestoreRequestSpec {
                    days,
                    tier: self.tier,
                },
            },
        })
    }
}

/// Application services container
pub struct AppServices {
    pub restore_check_service: RestoreCheckServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
    store: Option<Arc<dyn ArchiveStore>>,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            store: None,
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Use an already constructed store instead of the configured backend
    pub fn with_store(mut self, store: Arc<dyn ArchiveStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let store = match self.store {
            Some(store) => store,
            None => Self::create_store(&self.config.storage_backend).await?,
        };

        Ok(AppServices {
            restore_check_service: RestoreCheckServiceImpl::new(store),
        })
    }

    /// Create the storage adapter based on configuration
    async fn create_store(backend: &StorageBackend) -> Result<Arc<dyn ArchiveStore>, AppError> {
        match backend {
            StorageBackend::S3(config) => {
                if config.max_attempts == 0 {
                    return Err(AppError::Configuration {
                        message: "max attempts must be at least 1".to_string(),
                    });
                }
                if let Some(endpoint) = &config.endpoint {
                    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                        return Err(AppError::Configuration {
                            message: format!("endpoint must be an http(s) URL: {}", endpoint),
                        });
                    }
                }
                Ok(Arc::new(S3ArchiveStore::from_config(config).await))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Run one check end to end.
///
/// `config` is validated before the builder creates any backend client, so a
/// bad bucket, key or day count never reaches the network.
pub async fn run_check(builder: AppBuilder, config: &CheckConfig) -> Result<Outcome, AppError> {
    let request = config.to_request().map_err(CheckError::from)?;
    let services = builder.build().await?;
    let outcome = services.restore_check_service.check(&request).await?;
    Ok(outcome)
}

/// Create an application backed by the given in-memory store
pub async fn create_in_memory_app(store: InMemoryArchiveStore) -> Result<AppServices, AppError> {
    AppBuilder::new().with_store(Arc::new(store)).build().await
}
