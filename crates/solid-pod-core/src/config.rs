//! Centralized configuration for the pod client.
//!
//! Protocol constants for the LDP requests and the defaults a client starts with.

/// Pod protocol configuration.
pub struct PodConfig;

impl PodConfig {
    pub const USER_AGENT: &'static str = concat!("solid-pod/", env!("CARGO_PKG_VERSION"));

    // Content types
    pub const TEXT_TURTLE: &'static str = "text/turtle";
    pub const TEXT_PLAIN: &'static str = "text/plain";

    // Headers
    pub const CONTENT_TYPE_HEADER: &'static str = "Content-Type";
    pub const LINK_HEADER: &'static str = "Link";
    pub const SLUG_HEADER: &'static str = "Slug";
    pub const LDP_BASIC_CONTAINER_LINK: &'static str =
        "<http://www.w3.org/ns/ldp#BasicContainer>; rel=\"type\"";

    /// Turtle body sent when no container template path is configured.
    pub const DEFAULT_CONTAINER_TEMPLATE: &'static str =
        include_str!("../resources/create_container.ttl");

    /// Line separator of the stored text resources.
    pub const RECORD_SEPARATOR: char = '\n';
}
