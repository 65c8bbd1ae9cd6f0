//! LDP request construction.
//!
//! Every request the client sends is built here as a plain value, so the
//! method, URL, headers and body can be checked without a network.

use crate::config::PodConfig;
use reqwest::Method;

/// A fully described HTTP request against the pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl PodRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `POST` to the pod root creating a basic container named by the slug.
    pub fn create_container(base_url: &str, container_name: &str, template: Vec<u8>) -> Self {
        Self::new(Method::POST, base_url.to_string())
            .with_header(PodConfig::CONTENT_TYPE_HEADER, PodConfig::TEXT_TURTLE)
            .with_header(PodConfig::LINK_HEADER, PodConfig::LDP_BASIC_CONTAINER_LINK)
            .with_header(PodConfig::SLUG_HEADER, format!("{}/", container_name))
            .with_body(template)
    }

    /// `POST` to the container creating a new text resource named by the slug.
    pub fn publish_new(
        base_url: &str,
        container_name: &str,
        file_name: &str,
        body: String,
    ) -> Self {
        Self::new(Method::POST, container_url(base_url, container_name))
            .with_header(PodConfig::CONTENT_TYPE_HEADER, PodConfig::TEXT_PLAIN)
            .with_header(PodConfig::SLUG_HEADER, file_name)
            .with_body(body)
    }

    /// `PUT` replacing the full content of an existing text resource.
    pub fn publish_existing(
        base_url: &str,
        container_name: &str,
        file_name: &str,
        body: String,
    ) -> Self {
        Self::new(
            Method::PUT,
            resource_url(base_url, container_name, file_name),
        )
        .with_header(PodConfig::CONTENT_TYPE_HEADER, PodConfig::TEXT_PLAIN)
        .with_body(body)
    }

    /// `GET` used to decide whether a resource exists.
    pub fn probe(base_url: &str, container_name: &str, file_name: &str) -> Self {
        Self::new(
            Method::GET,
            resource_url(base_url, container_name, file_name),
        )
    }

    /// `GET` fetching a resource's content.
    pub fn read(base_url: &str, container_name: &str, file_name: &str) -> Self {
        Self::new(
            Method::GET,
            resource_url(base_url, container_name, file_name),
        )
    }
}

/// URL of a container: the base URL followed by the container name.
pub fn container_url(base_url: &str, container_name: &str) -> String {
    format!("{}{}", base_url, container_name)
}

/// URL of a file resource inside a container.
pub fn resource_url(base_url: &str, container_name: &str, file_name: &str) -> String {
    format!("{}{}/{}", base_url, container_name, file_name)
}
