//! Build service abstraction
//!
//! The action talks to the service through this trait so the submit and
//! poll logic can run against a scripted fake in tests.

use async_trait::async_trait;
use kaniko_core::domain::job::JobHandle;
use kaniko_core::dto::job::JobRequest;

use crate::KanikoClient;
use crate::error::Result;

/// Operations the action needs from the build service
#[async_trait]
pub trait BuildService: Send + Sync {
    /// Submits a job and returns its server-assigned handle
    async fn create_job(&self, req: &JobRequest) -> Result<JobHandle>;

    /// Returns the raw body of a status query
    async fn job_status_body(&self, handle: &JobHandle) -> Result<String>;
}

#[async_trait]
impl BuildService for KanikoClient {
    async fn create_job(&self, req: &JobRequest) -> Result<JobHandle> {
        KanikoClient::create_job(self, req).await
    }

    async fn job_status_body(&self, handle: &JobHandle) -> Result<String> {
        KanikoClient::job_status_body(self, handle).await
    }
}
