//! S3 storage adapter implementation using the AWS SDK
//!
//! The object_store crate has no notion of storage classes or restore jobs,
//! so the archive port is implemented directly on top of `aws-sdk-s3`.

pub mod s3_adapter;

pub use s3_adapter::S3ArchiveStore;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::Client;

/// Configuration for the S3 client
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Falls back to the SDK's region provider chain when unset
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services
    pub endpoint: Option<String>,
    pub force_path_style: bool,
    /// Total attempts per request; 1 disables SDK retries
    pub max_attempts: u32,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            force_path_style: false,
            max_attempts: 1,
        }
    }
}

/// Create an S3 client from configuration and the ambient credential chain
pub async fn create_s3_client(config: &S3Config) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }
    let shared_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
        .force_path_style(config.force_path_style)
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts.max(1)))
        .build();

    Client::from_conf(s3_config)
}
