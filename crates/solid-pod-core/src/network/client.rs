//! HTTP transport for pod requests.
//!
//! Wraps a single long-lived reqwest client. Responses come back as data
//! whatever their status; deciding what a status means is the caller's job.

use crate::config::PodConfig;
use crate::pod::PodRequest;
use crate::{PodError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client used by a [`crate::PodClient`] for all of its requests.
pub struct HttpClient {
    client: Client,
    /// Per-request timeout, if any. `None` leaves timing to the transport.
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Create a client without a request timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a client with an optional per-request timeout.
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(PodConfig::USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| PodError::Network {
            message: format!("Failed to create HTTP client: {}", e),
            cause: None,
        })?;

        Ok(Self { client, timeout })
    }

    /// The configured per-request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Send a request and collect its status and text body.
    pub async fn send(&self, request: &PodRequest) -> Result<PodResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("{} {} -> {}", request.method, request.url, status.as_u16());
        Ok(PodResponse { status, body })
    }
}
