//! Client for LDP containers and text resources in a Solid pod.

use crate::codec::{decode, encode};
use crate::error::{PodError, Result};
use crate::network::HttpClient;
use crate::pod::{container_url, resource_url, ContainerTemplate, PodClientBuilder, PodRequest};
use reqwest::StatusCode;
use std::fmt::Display;
use tracing::{error, info, warn};

/// Client for one Solid pod.
///
/// Writes are best-effort: [`create_container`](Self::create_container),
/// [`publish_data`](Self::publish_data) and the write half of
/// [`update_data`](Self::update_data) log failures and return normally.
/// Reads are not: [`read_data`](Self::read_data) returns every failure to the
/// caller, since its result is consumed as data.
///
/// There is no local state besides the pod URL; every decision is made
/// against the pod as it is at the time of the call.
pub struct PodClient {
    pub(crate) pod_url: String,
    pub(crate) http: HttpClient,
    pub(crate) template: ContainerTemplate,
}

impl PodClient {
    /// Create a client for the pod at `pod_url` with default settings.
    pub fn new(pod_url: impl Into<String>) -> Result<Self> {
        PodClientBuilder::new(pod_url).build()
    }

    /// Create a builder for a PodClient.
    pub fn builder(pod_url: impl Into<String>) -> PodClientBuilder {
        PodClientBuilder::new(pod_url)
    }

    /// The pod root URL, always ending with `/`.
    pub fn pod_url(&self) -> &str {
        &self.pod_url
    }

    /// URL of the container named `container_name`.
    pub fn container_url(&self, container_name: &str) -> String {
        container_url(&self.pod_url, container_name)
    }

    /// URL of the file `file_name` inside `container_name`.
    pub fn resource_url(&self, container_name: &str, file_name: &str) -> String {
        resource_url(&self.pod_url, container_name, file_name)
    }

    /// Create an LDP basic container at the pod root.
    ///
    /// Failures, including an unreadable template, are logged and not returned.
    pub async fn create_container(&self, container_name: &str) {
        if let Err(e) = self.try_create_container(container_name).await {
            error!("Failed to create container '{}': {}", container_name, e);
        }
    }

    async fn try_create_container(&self, container_name: &str) -> Result<()> {
        validate_segment("container_name", container_name)?;

        let template = self.template.load().await?;
        let request = PodRequest::create_container(&self.pod_url, container_name, template);
        let response = self.http.send(&request).await?;

        info!(
            "Created container '{}' with status: {}",
            container_name,
            response.status.as_u16()
        );
        Ok(())
    }

    /// Store `values` as the content of `file_name` in `container_name`.
    ///
    /// An existing resource is replaced with `PUT`; a missing one is created
    /// with `POST` to the container. Failures are logged and not returned.
    pub async fn publish_data<T: Display>(
        &self,
        container_name: &str,
        file_name: &str,
        values: &[T],
    ) {
        if let Err(e) = self
            .try_publish_data(container_name, file_name, encode(values))
            .await
        {
            error!(
                "Failed to publish data to {}: {}",
                self.resource_url(container_name, file_name),
                e
            );
        }
    }

    async fn try_publish_data(
        &self,
        container_name: &str,
        file_name: &str,
        body: String,
    ) -> Result<()> {
        validate_segment("container_name", container_name)?;
        validate_segment("file_name", file_name)?;

        let request = if self.exists(container_name, file_name).await {
            PodRequest::publish_existing(&self.pod_url, container_name, file_name, body)
        } else {
            PodRequest::publish_new(&self.pod_url, container_name, file_name, body)
        };

        let response = self.http.send(&request).await?;
        info!("Published data with status: {}", response.status.as_u16());
        Ok(())
    }

    /// Check whether a resource exists.
    ///
    /// Any status other than 404 counts as existing. A failed request is
    /// logged and counts as missing.
    pub async fn exists(&self, container_name: &str, file_name: &str) -> bool {
        if let Err(e) = validate_segment("container_name", container_name)
            .and_then(|_| validate_segment("file_name", file_name))
        {
            warn!("Existence probe skipped: {}", e);
            return false;
        }

        let request = PodRequest::probe(&self.pod_url, container_name, file_name);
        match self.http.send(&request).await {
            Ok(response) => response.status != StatusCode::NOT_FOUND,
            Err(e) => {
                warn!("Existence probe for {} failed: {}", request.url, e);
                false
            }
        }
    }

    /// Read the records stored in `file_name` in `container_name`.
    ///
    /// The status code is not inspected: whatever body the pod returns is
    /// decoded, so an error page decodes to its lines. Transport failures are
    /// returned as errors.
    pub async fn read_data(&self, container_name: &str, file_name: &str) -> Result<Vec<String>> {
        validate_segment("container_name", container_name)?;
        validate_segment("file_name", file_name)?;

        let request = PodRequest::read(&self.pod_url, container_name, file_name);
        let response = self.http.send(&request).await?;
        info!("Read data request: {}", response.status.as_u16());

        Ok(decode(&response.body))
    }

    /// Append `values` to the records of an existing resource.
    ///
    /// Reads the current records, appends the new ones and publishes the whole
    /// sequence again. A failed read aborts the update and is returned; a failed
    /// write is logged like [`publish_data`](Self::publish_data).
    pub async fn update_data<T: Display>(
        &self,
        container_name: &str,
        file_name: &str,
        values: &[T],
    ) -> Result<()> {
        let mut records = self.read_data(container_name, file_name).await?;
        records.extend(values.iter().map(|v| v.to_string()));

        self.publish_data(container_name, file_name, records.as_slice()).await;
        Ok(())
    }
}

/// A container or file name must be a single non-empty path segment.
fn validate_segment(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PodError::validation(field, "must not be empty"));
    }
    if value.contains('/') {
        return Err(PodError::validation(
            field,
            format!("'{}' must not contain '/'", value),
        ));
    }
    Ok(())
}
