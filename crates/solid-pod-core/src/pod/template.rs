//! Turtle body used when creating containers.

use crate::config::PodConfig;
use crate::{PodError, Result};
use std::path::PathBuf;

/// Source of the container-creation body. The body is passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContainerTemplate {
    /// The template compiled into the crate.
    #[default]
    Builtin,
    /// A turtle file read on every container creation.
    File(PathBuf),
}

impl ContainerTemplate {
    /// Load the template bytes.
    pub async fn load(&self) -> Result<Vec<u8>> {
        match self {
            ContainerTemplate::Builtin => {
                Ok(PodConfig::DEFAULT_CONTAINER_TEMPLATE.as_bytes().to_vec())
            }
            ContainerTemplate::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| PodError::template(e, path)),
        }
    }
}
