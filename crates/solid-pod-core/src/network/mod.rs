//! Network layer: the HTTP transport pod requests are sent through.

mod client;

pub use client::{HttpClient, PodResponse};
