//! Completion poller
//!
//! Queries a submitted job's status until it reports a terminal state.
//! Unparseable bodies and transport faults are logged and retried after the
//! regular delay; only `done` ends the loop. There is no attempt limit, the
//! surrounding CI system owns the wall-clock timeout.

use kaniko_client::BuildService;
use kaniko_core::domain::job::{JobHandle, JobStatus, Outcome};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::pacer::Pacer;

/// State of the poll loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PollState {
    Polling,
    Finished(Outcome),
}

/// Polls a job until it finishes
pub struct CompletionPoller {
    service: Arc<dyn BuildService>,
    pacer: Arc<dyn Pacer>,
    interval: Duration,
}

impl CompletionPoller {
    pub fn new(service: Arc<dyn BuildService>, pacer: Arc<dyn Pacer>, interval: Duration) -> Self {
        Self {
            service,
            pacer,
            interval,
        }
    }

    /// Runs the poll loop until the job is done
    pub async fn wait(&self, handle: &JobHandle) -> Outcome {
        info!("Waiting for job {} (interval: {:?})", handle, self.interval);

        let mut attempt: u64 = 0;
        loop {
            attempt += 1;

            if let PollState::Finished(outcome) = self.poll_once(handle, attempt).await {
                info!(
                    "Job {} finished after {} poll(s): {:?}",
                    handle, attempt, outcome
                );
                return outcome;
            }

            self.pacer.pause(self.interval).await;
        }
    }

    /// Performs a single status query
    async fn poll_once(&self, handle: &JobHandle, attempt: u64) -> PollState {
        let body = match self.service.job_status_body(handle).await {
            Ok(body) => body,
            Err(e) if e.is_transport() => {
                warn!(
                    "Status query {} for job {} could not reach the service: {}",
                    attempt, handle, e
                );
                return PollState::Polling;
            }
            Err(e) => {
                warn!("Status query {} for job {} failed: {}", attempt, handle, e);
                return PollState::Polling;
            }
        };

        info!("[{}] {}", attempt, body);

        match JobStatus::from_body(&body) {
            Ok(status) => match status.outcome() {
                Some(outcome) => PollState::Finished(outcome),
                None => {
                    debug!("Job {} still running", handle);
                    PollState::Polling
                }
            },
            Err(e) => {
                warn!("Could not parse status of job {}: {}", handle, e);
                PollState::Polling
            }
        }
    }
}
