//! Error types for the Solid pod client.
//!
//! Only reads surface these to callers. Container creation and publishing log
//! them and carry on; see [`crate::PodClient`] for which operation does what.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pod operations.
#[derive(Debug, Error)]
pub enum PodError {
    // Transport errors
    #[error("Network error: {message}")]
    Network {
        message: String,
        /// Optional cause description
        cause: Option<String>,
    },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    // Configuration errors
    #[error("Invalid pod URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Failed to read container template {path:?}: {message}")]
    Template {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },
}

/// Result type alias for pod operations.
pub type Result<T> = std::result::Result<T, PodError>;

impl From<reqwest::Error> for PodError {
    fn from(err: reqwest::Error) -> Self {
        let url = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if err.is_timeout() {
            PodError::Timeout { url }
        } else if err.is_connect() {
            PodError::Connect {
                url,
                message: err.to_string(),
            }
        } else {
            PodError::Network {
                message: err.to_string(),
                cause: std::error::Error::source(&err).map(|s| s.to_string()),
            }
        }
    }
}

impl From<std::io::Error> for PodError {
    fn from(err: std::io::Error) -> Self {
        PodError::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl PodError {
    /// Create a template error with path context.
    pub fn template(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        PodError::Template {
            message: err.to_string(),
            path: path.into(),
            source: Some(err),
        }
    }

    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PodError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error came from the HTTP transport rather than local input.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            PodError::Network { .. } | PodError::Timeout { .. } | PodError::Connect { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PodError::validation("container_name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Validation error for container_name: must not be empty"
        );

        let err = PodError::Timeout {
            url: "https://pod.example/notes/a.txt".into(),
        };
        assert_eq!(
            err.to_string(),
            "Request to https://pod.example/notes/a.txt timed out"
        );
    }

    #[test]
    fn test_transport_classification() {
        assert!(PodError::Connect {
            url: "http://127.0.0.1:1/".into(),
            message: "refused".into(),
        }
        .is_transport());
        assert!(PodError::Network {
            message: "reset".into(),
            cause: None,
        }
        .is_transport());
        assert!(!PodError::validation("file_name", "contains '/'").is_transport());
        assert!(!PodError::InvalidUrl {
            url: "ftp://pod".into(),
            message: "unsupported scheme".into(),
        }
        .is_transport());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PodError = io.into();
        assert!(matches!(err, PodError::Io { source: Some(_), .. }));
        assert_eq!(err.to_string(), "IO error: denied");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_template_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PodError::template(io, "/tmp/create_container.ttl");
        match err {
            PodError::Template { path, source, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/create_container.ttl"));
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
