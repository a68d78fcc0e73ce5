//! Build job endpoints

use crate::KanikoClient;
use crate::error::{ClientError, Result};
use kaniko_core::domain::job::JobHandle;
use kaniko_core::dto::job::{CreatedJob, JobRequest};
use reqwest::StatusCode;
use tracing::debug;

impl KanikoClient {
    /// Create a build job
    ///
    /// Only a `200 OK` counts as accepted; any other status is returned as
    /// [`ClientError::ApiError`] carrying the response body verbatim.
    ///
    /// # Returns
    /// The name the service registered the job under
    pub async fn create_job(&self, req: &JobRequest) -> Result<JobHandle> {
        let url = format!("{}/kaniko", self.base_url);
        let response = self
            .client
            .post(&url)
            .headers(self.headers.clone())
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let created: CreatedJob = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse job creation response: {}", e))
        })?;

        if created.name.is_empty() {
            return Err(ClientError::ParseError(
                "Job creation response has an empty name".to_string(),
            ));
        }

        if let Some(message) = &created.message {
            debug!("Service accepted job: {}", message);
        }

        Ok(JobHandle::new(created.name))
    }

    /// Fetch the raw status body of a job
    ///
    /// The body is returned whatever the status code is; the service reports
    /// failed builds with error codes, so interpreting it is left to the caller.
    pub async fn job_status_body(&self, handle: &JobHandle) -> Result<String> {
        let url = format!("{}/kaniko", self.base_url);
        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&[("name", handle.as_str())])
            .send()
            .await?;

        debug!("Status query for {} returned {}", handle, response.status());

        Ok(response.text().await?)
    }
}
