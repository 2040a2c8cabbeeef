use crate::domain::{
    errors::CheckResult,
    models::{CheckRequest, Outcome},
};
use async_trait::async_trait;

/// Service port for a single archive retrieval check.
/// Probes the object, decides the next step and carries it out.
#[async_trait]
pub trait RestoreCheckService: Send + Sync + 'static {
    /// Run one check to a terminal outcome
    async fn check(&self, request: &CheckRequest) -> CheckResult<Outcome>;
}
