use std::sync::Arc;

use tracing::info;

use crate::{
    domain::{
        errors::CheckResult,
        models::{Action, CheckRequest, Outcome, RestoreRequestSpec},
        value_objects::ObjectLocation,
    },
    ports::storage::ArchiveStore,
    services::local_files::write_atomically,
};

/// Carries out the action chosen by the decision engine
#[derive(Clone)]
pub struct ActionExecutor {
    store: Arc<dyn ArchiveStore>,
}

impl ActionExecutor {
    pub fn new(store: Arc<dyn ArchiveStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, request: &CheckRequest, action: &Action) -> CheckResult<Outcome> {
        match action {
            Action::DoNothing(reason) => {
                info!("Nothing to do for {}: {}", request.location, reason);
                Ok(Outcome::Skipped(*reason))
            }
            Action::FetchObject => self.fetch(request).await,
            Action::IssueRestore(spec) => self.restore(&request.location, *spec).await,
        }
    }

    async fn fetch(&self, request: &CheckRequest) -> CheckResult<Outcome> {
        let destination = request.destination();
        info!("Getting: {}", request.location);

        let body = self.store.get_object(&request.location).await?;
        let bytes =
            write_atomically(body, &destination, request.policy.overwrite_enabled).await?;

        info!(bytes, "Downloaded as {}", destination.display());
        Ok(Outcome::Fetched {
            path: destination,
            bytes,
        })
    }

    async fn restore(
        &self,
        location: &ObjectLocation,
        spec: RestoreRequestSpec,
    ) -> CheckResult<Outcome> {
        info!(days = spec.days.get(), tier = %spec.tier, "Restoring: {}", location);

        self.store
            .restore_object(location, spec.tier, spec.days)
            .await?;

        info!("Restore initiated for {}, not waiting for completion", location);
        Ok(Outcome::RestoreRequested(spec))
    }
}
