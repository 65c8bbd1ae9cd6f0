//! Builder for configuring PodClient construction.

use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::error::{PodError, Result};
use crate::network::HttpClient;
use crate::pod::{ContainerTemplate, PodClient};

/// Builder for configuring a [`PodClient`].
///
/// # Example
///
/// ```rust,ignore
/// use solid_pod_core::PodClient;
///
/// let pod = PodClient::builder("https://alice.solidcommunity.net/")
///     .container_template("resources/create_container.ttl")
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
/// ```
pub struct PodClientBuilder {
    pod_url: String,
    template: ContainerTemplate,
    timeout: Option<Duration>,
}

impl PodClientBuilder {
    /// Create a new builder for the pod at `pod_url`.
    pub fn new(pod_url: impl Into<String>) -> Self {
        Self {
            pod_url: pod_url.into(),
            template: ContainerTemplate::Builtin,
            timeout: None,
        }
    }

    /// Read the container-creation body from a turtle file.
    ///
    /// Default: the built-in template.
    pub fn container_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.template = ContainerTemplate::File(path.into());
        self
    }

    /// Apply a per-request timeout.
    ///
    /// Default: none, the transport's own behavior applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the PodClient.
    pub fn build(self) -> Result<PodClient> {
        let pod_url = normalize_pod_url(&self.pod_url)?;
        let http = HttpClient::with_timeout(self.timeout)?;

        info!("Pod client initialized for: {}", pod_url);

        Ok(PodClient {
            pod_url,
            http,
            template: self.template,
        })
    }
}

/// Validate the pod URL and make sure it ends with `/`, since resource paths
/// are appended to it verbatim.
fn normalize_pod_url(pod_url: &str) -> Result<String> {
    let parsed = url::Url::parse(pod_url).map_err(|e| PodError::InvalidUrl {
        url: pod_url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PodError::InvalidUrl {
            url: pod_url.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    let mut normalized = pod_url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
