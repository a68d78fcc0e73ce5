//! Job DTOs for the `/kaniko` endpoint

use serde::{Deserialize, Serialize};

/// Request to create a build job
///
/// Optional fields are left out of the JSON body entirely when unset; the
/// service distinguishes an absent secret from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequest {
    /// Unique job name, `{base}-{nanos}`
    pub name: String,
    /// Build context locator (e.g. a git or bucket URL)
    pub context: String,
    /// Image destination to push to
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
}

impl JobRequest {
    /// Creates a request whose name is stamped with the current time
    pub fn new(
        base_name: &str,
        context: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self::stamped(base_name, epoch_nanos(), context, destination)
    }

    /// Creates a request whose name is stamped with the given timestamp
    pub fn stamped(
        base_name: &str,
        nanos: i64,
        context: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: job_name(base_name, nanos),
            context: context.into(),
            destination: destination.into(),
            secret: None,
            arch: None,
        }
    }

    pub fn with_secret(mut self, secret: Option<String>) -> Self {
        self.secret = secret;
        self
    }

    pub fn with_arch(mut self, arch: Option<String>) -> Self {
        self.arch = arch;
        self
    }
}

/// Body returned by a successful create call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedJob {
    /// Name the service registered the job under
    pub name: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Builds a job name unique per invocation
pub fn job_name(base_name: &str, nanos: i64) -> String {
    format!("{}-{}", base_name, nanos)
}

/// Nanoseconds since the Unix epoch
pub fn epoch_nanos() -> i64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000))
}
