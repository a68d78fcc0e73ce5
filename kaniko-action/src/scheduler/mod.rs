//! Scheduler layer for the action
//!
//! Submits the build job once, then hands its handle to the poller which
//! waits for a terminal state. The two steps never overlap.

pub mod poller;
pub mod submitter;

#[cfg(test)]
pub(crate) mod testing;

pub use poller::CompletionPoller;
pub use submitter::JobSubmitter;

use anyhow::{Context, Result};
use kaniko_client::BuildService;
use kaniko_core::domain::job::Outcome;
use std::sync::Arc;

use crate::config::ActionConfig;
use crate::pacer::Pacer;

/// Submits the configured job and waits for its outcome
///
/// Submission failures are returned as errors without any status query.
pub async fn run_build(
    service: Arc<dyn BuildService>,
    pacer: Arc<dyn Pacer>,
    config: &ActionConfig,
) -> Result<Outcome> {
    let handle = JobSubmitter::new(Arc::clone(&service))
        .submit(config)
        .await
        .context("Failed to submit build job")?;

    let poller = CompletionPoller::new(service, pacer, config.poll_interval);
    Ok(poller.wait(&handle).await)
}
