//! Kaniko HTTP Client
//!
//! A small, typed HTTP client for the kaniko build service.
//!
//! The service exposes a single resource, `/kaniko`: `POST` creates a build
//! job and `GET ?name=...` reports its status. Every request carries the
//! caller's custom headers.
//!
//! # Example
//!
//! ```no_run
//! use kaniko_client::KanikoClient;
//! use kaniko_core::domain::headers::HeaderSet;
//! use kaniko_core::dto::job::JobRequest;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let headers = HeaderSet::from_json(r#"{"Authorization": "Bearer abc"}"#)?;
//! let client = KanikoClient::new("http://localhost:8080").with_headers(&headers)?;
//!
//! let request = JobRequest::new("app", "git://github.com/acme/app", "registry/app:latest");
//! let handle = client.create_job(&request).await?;
//! println!("Created job: {}", handle);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod jobs;
mod service;

pub use error::{ClientError, Result};
pub use service::BuildService;

use kaniko_core::domain::headers::HeaderSet;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// HTTP client for the kaniko build service
#[derive(Debug, Clone)]
pub struct KanikoClient {
    /// Base URL of the service (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Custom headers sent with every request
    headers: HeaderMap,
}

impl KanikoClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use kaniko_client::KanikoClient;
    ///
    /// let client = KanikoClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use kaniko_client::KanikoClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = KanikoClient::with_client("http://localhost:8080", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            headers: HeaderMap::new(),
        }
    }

    /// Attach custom headers to every subsequent request
    ///
    /// Fails if a header name or value cannot be sent over HTTP.
    pub fn with_headers(mut self, headers: &HeaderSet) -> Result<Self> {
        let mut map = HeaderMap::with_capacity(headers.len());
        for (name, value) in headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            let mut header_value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::InvalidHeader(format!("{}: {}", name, e)))?;
            header_value.set_sensitive(true);
            map.insert(header_name, header_value);
        }
        self.headers = map;
        Ok(self)
    }

    /// Get the base URL of the service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check that the service is up
    ///
    /// # Returns
    /// The readiness message served at the root route
    pub async fn ready(&self) -> Result<String> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        Ok(body)
    }
}
