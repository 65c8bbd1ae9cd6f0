//! Solid Pod Core - client for LDP containers and line-delimited text resources.
//!
//! A [`PodClient`] creates containers in a Solid pod and reads, publishes and
//! appends to plain-text resources inside them. Each resource holds one value
//! per line.
//!
//! # Example
//!
//! ```rust,ignore
//! use solid_pod_core::PodClient;
//!
//! #[tokio::main]
//! async fn main() -> solid_pod_core::Result<()> {
//!     let pod = PodClient::new("https://alice.solidcommunity.net/")?;
//!
//!     pod.create_container("notes").await;
//!     pod.publish_data("notes", "a.txt", &["x", "y"]).await;
//!     pod.update_data("notes", "a.txt", &["z"]).await?;
//!
//!     let records = pod.read_data("notes", "a.txt").await?;
//!     assert_eq!(records, ["x", "y", "z"]);
//!     Ok(())
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod network;
pub mod pod;

// Re-export commonly used types
pub use codec::{decode, encode};
pub use config::PodConfig;
pub use error::{PodError, Result};
pub use network::{HttpClient, PodResponse};
pub use pod::{ContainerTemplate, PodClient, PodClientBuilder, PodRequest};
