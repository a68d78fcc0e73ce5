//! Kaniko Action
//!
//! A CI step that triggers a server-side kaniko image build and blocks until
//! the build finishes.
//!
//! Architecture:
//! - Configuration: `INPUT_*` environment variables or flags, read once
//! - Scheduler: one job submission followed by a status poll loop
//! - Pacer: the delay between polls
//!
//! Exit status is 0 when the build passes and 1 when submission fails or the
//! build reports failure.

mod config;
mod pacer;
mod scheduler;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use kaniko_client::{BuildService, ClientError, KanikoClient};
use kaniko_core::domain::job::Outcome;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ActionArgs, ActionConfig};
use crate::pacer::TokioPacer;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kaniko_action=info,kaniko_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ActionArgs::parse();

    let result = run(args).await;
    let (code, rejected_body) = report(&result);

    match &result {
        Ok(Outcome::Succeeded) => println!("{}", "Build succeeded".green().bold()),
        Ok(Outcome::Failed) => println!("{}", "Build failed".red().bold()),
        Err(e) => {
            // A rejected submission's body goes to the operator as-is
            if let Some(body) = rejected_body {
                println!("{}", body);
            }
            error!("{:#}", e);
        }
    }

    ExitCode::from(code)
}

/// Maps the result of a run to its exit status and, for a rejected
/// submission, the service's response body
fn report(result: &Result<Outcome>) -> (u8, Option<&str>) {
    match result {
        Ok(outcome) if outcome.is_success() => (0, None),
        Ok(_) => (1, None),
        Err(e) => {
            let body = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<ClientError>())
                .and_then(ClientError::response_body);
            (1, body)
        }
    }
}

async fn run(args: ActionArgs) -> Result<Outcome> {
    let config = ActionConfig::from_args(args)?;
    config.validate()?;
    info!("Loaded configuration: {:?}", config);

    let http_client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let client = KanikoClient::with_client(config.url.clone(), http_client)
        .with_headers(&config.headers)
        .context("Failed to apply custom headers")?;

    if config.preflight {
        let status = client
            .ready()
            .await
            .context("Build service readiness check failed")?;
        info!("Build service is ready: {}", status);
    }

    let service: Arc<dyn BuildService> = Arc::new(client);
    scheduler::run_build(service, Arc::new(TokioPacer), &config).await
}
