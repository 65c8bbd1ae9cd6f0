//! Solid pod access: request construction, container templates and the client.

mod builder;
mod client;
mod request;
mod template;

pub use builder::PodClientBuilder;
pub use client::PodClient;
pub use request::{container_url, resource_url, PodRequest};
pub use template::ContainerTemplate;
