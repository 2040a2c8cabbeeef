use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{
        errors::CheckResult,
        models::{CheckRequest, Outcome},
    },
    ports::{services::RestoreCheckService, storage::ArchiveStore},
    services::{
        decision::{decide, depends_on_local_file},
        executor::ActionExecutor,
        local_files::local_file_exists,
        probe::ObjectProbe,
    },
};

/// Implementation of RestoreCheckService over an injected archive store
#[derive(Clone)]
pub struct RestoreCheckServiceImpl {
    probe: ObjectProbe,
    executor: ActionExecutor,
}

impl RestoreCheckServiceImpl {
    /// Create a new RestoreCheckServiceImpl instance
    pub fn new(store: Arc<dyn ArchiveStore>) -> Self {
        Self {
            probe: ObjectProbe::new(store.clone()),
            executor: ActionExecutor::new(store),
        }
    }
}

#[async_trait]
impl RestoreCheckService for RestoreCheckServiceImpl {
    async fn check(&self, request: &CheckRequest) -> CheckResult<Outcome> {
        let status = self.probe.probe(&request.location).await?;

        let local_exists = if depends_on_local_file(&status) {
            local_file_exists(&request.destination()).await?
        } else {
            false
        };

        let action = decide(&status, local_exists, &request.policy);
        info!(?action, local_exists, "Decided next step for {}", request.location);

        self.executor.execute(request, &action).await
    }
}
