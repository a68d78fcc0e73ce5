//! Action configuration
//!
//! Inputs arrive as `INPUT_*` environment variables (the CI runner's
//! convention) or as long flags, and are frozen into an [`ActionConfig`]
//! before any request is made.

use anyhow::Context;
use clap::Parser;
use kaniko_core::domain::headers::HeaderSet;
use std::fmt;
use std::time::Duration;

/// Raw command-line / environment inputs
#[derive(Parser, Debug, Clone)]
#[command(name = "kaniko-action")]
#[command(about = "Submit a kaniko build job and wait for it to finish", long_about = None)]
pub struct ActionArgs {
    /// Base job name; a nanosecond timestamp is appended
    #[arg(long, env = "INPUT_NAME")]
    pub name: String,

    /// Build service base URL
    #[arg(long, env = "INPUT_URL")]
    pub url: String,

    /// Build context locator
    #[arg(long, env = "INPUT_CONTEXT")]
    pub context: String,

    /// Image destination
    #[arg(long, env = "INPUT_DESTINATION")]
    pub destination: String,

    /// Registry secret name forwarded to the service
    #[arg(long, env = "INPUT_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Target architecture (e.g. amd64, arm64)
    #[arg(long, env = "INPUT_ARCH")]
    pub arch: Option<String>,

    /// JSON object of headers sent with every request
    #[arg(long, env = "INPUT_HEADERS", hide_env_values = true)]
    pub headers: Option<String>,

    /// Seconds to wait between status polls [default: 5]
    #[arg(long, env = "INPUT_POLL_INTERVAL")]
    pub poll_interval: Option<String>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(long, env = "INPUT_REQUEST_TIMEOUT")]
    pub request_timeout: Option<String>,

    /// Check the service's readiness route before submitting (true/false)
    #[arg(long, env = "INPUT_PREFLIGHT")]
    pub preflight: Option<String>,
}

const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Immutable configuration for one invocation
#[derive(Clone)]
pub struct ActionConfig {
    pub name: String,
    pub url: String,
    pub context: String,
    pub destination: String,
    pub secret: Option<String>,
    pub arch: Option<String>,
    pub headers: HeaderSet,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub preflight: bool,
}

impl ActionConfig {
    /// Builds the configuration from parsed inputs
    ///
    /// Empty optional inputs count as unset, since CI runners export
    /// missing inputs as empty strings.
    pub fn from_args(args: ActionArgs) -> anyhow::Result<Self> {
        let headers = match args.headers.as_deref() {
            Some(raw) => HeaderSet::from_json(raw).context("Failed to parse headers input")?,
            None => HeaderSet::new(),
        };

        let poll_interval = match non_empty(args.poll_interval) {
            Some(raw) => parse_secs(&raw).context("Invalid poll_interval input")?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        let request_timeout = match non_empty(args.request_timeout) {
            Some(raw) => parse_secs(&raw).context("Invalid request_timeout input")?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let preflight = match non_empty(args.preflight) {
            Some(raw) => parse_bool(&raw).context("Invalid preflight input")?,
            None => false,
        };

        Ok(Self {
            name: args.name,
            url: args.url,
            context: args.context,
            destination: args.destination,
            secret: non_empty(args.secret),
            arch: non_empty(args.arch),
            headers,
            poll_interval: Duration::from_secs(poll_interval),
            request_timeout: Duration::from_secs(request_timeout),
            preflight,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.is_empty() {
            anyhow::bail!("name cannot be empty");
        }

        if self.context.is_empty() {
            anyhow::bail!("context cannot be empty");
        }

        if self.destination.is_empty() {
            anyhow::bail!("destination cannot be empty");
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            anyhow::bail!("url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_secs(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("expected a whole number of seconds, got '{}'", raw))
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("expected true or false, got '{}'", raw),
    }
}

impl fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionConfig")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("context", &self.context)
            .field("destination", &self.destination)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("arch", &self.arch)
            .field("headers", &self.headers)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .field("preflight", &self.preflight)
            .finish()
    }
}
