//! Delay between status polls
//!
//! The poller waits through this trait so tests can observe every pause
//! without real time passing.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller between poll attempts
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// Pacer backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
