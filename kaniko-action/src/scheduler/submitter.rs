//! Job submitter
//!
//! Builds the job request from the action configuration and issues the
//! single create call. Submission is never retried.

use kaniko_client::{BuildService, Result};
use kaniko_core::domain::job::JobHandle;
use kaniko_core::dto::job::{JobRequest, epoch_nanos};
use std::sync::Arc;
use tracing::info;

use crate::config::ActionConfig;

/// Submits one build job per invocation
pub struct JobSubmitter {
    service: Arc<dyn BuildService>,
}

impl JobSubmitter {
    pub fn new(service: Arc<dyn BuildService>) -> Self {
        Self { service }
    }

    /// Submits the job described by `config`
    ///
    /// # Returns
    /// The handle the service assigned, used for all status polls
    pub async fn submit(&self, config: &ActionConfig) -> Result<JobHandle> {
        let request = build_request(config, epoch_nanos());

        info!(
            "Submitting job {} (context: {}, destination: {})",
            request.name, request.context, request.destination
        );

        let handle = self.service.create_job(&request).await?;

        info!("Job {} accepted as {}", request.name, handle);
        Ok(handle)
    }
}

/// Builds the create-call body, stamping the name with `nanos`
pub fn build_request(config: &ActionConfig, nanos: i64) -> JobRequest {
    JobRequest::stamped(
        &config.name,
        nanos,
        config.context.clone(),
        config.destination.clone(),
    )
    .with_secret(config.secret.clone())
    .with_arch(config.arch.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::testing::{ScriptedService, test_config};
    use kaniko_client::ClientError;

    #[test]
    fn test_build_request_stamps_name() {
        let config = test_config();
        let request = build_request(&config, 1234);
        assert_eq!(request.name, "app-1234");
        assert_eq!(request.context, config.context);
        assert_eq!(request.destination, config.destination);
        assert!(request.secret.is_none());
        assert!(request.arch.is_none());
    }

    #[test]
    fn test_build_request_forwards_optionals() {
        let mut config = test_config();
        config.secret = Some("regcred".to_string());
        config.arch = Some("arm64".to_string());

        let request = build_request(&config, 1);
        assert_eq!(request.secret.as_deref(), Some("regcred"));
        assert_eq!(request.arch.as_deref(), Some("arm64"));
    }

    #[tokio::test]
    async fn test_submit_returns_service_handle() {
        let service = Arc::new(ScriptedService::accepting("app-srv-1", Vec::new()));
        let submitter = JobSubmitter::new(service.clone());

        let handle = submitter.submit(&test_config()).await.unwrap();

        assert_eq!(handle, JobHandle::new("app-srv-1"));
        let created = service.created();
        assert_eq!(created.len(), 1);
        assert!(created[0].name.starts_with("app-"));
    }

    #[tokio::test]
    async fn test_submit_rejection_is_returned() {
        let service = Arc::new(ScriptedService::rejecting(
            ClientError::api_error(401, "unauthorized"),
        ));
        let submitter = JobSubmitter::new(service.clone());

        let err = submitter.submit(&test_config()).await.unwrap_err();

        assert_eq!(err.response_body(), Some("unauthorized"));
        assert_eq!(service.poll_count(), 0);
    }
}
