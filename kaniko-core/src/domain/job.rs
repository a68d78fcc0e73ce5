//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned job name
///
/// Returned by the create call and used as the `name` query key for every
/// status poll of the same invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded body of a status poll
///
/// `pass` only carries meaning once `done` is true, and defaults to `false`
/// when the service leaves it out of an in-progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub done: bool,
    #[serde(default)]
    pub pass: bool,
}

impl JobStatus {
    /// Decodes a raw poll body
    pub fn from_body(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Terminal outcome, or `None` while the job is still in flight
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.done, self.pass) {
            (false, _) => None,
            (true, true) => Some(Outcome::Succeeded),
            (true, false) => Some(Outcome::Failed),
        }
    }
}

/// Terminal result of a build job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Succeeded,
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }
}
