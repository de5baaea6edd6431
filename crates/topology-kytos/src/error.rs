//! Error types for the Kytos topology adaptor.

use sdx_topology::{TopologyAdaptorError, TopologyAdaptorErrorKind};
use thiserror::Error;

/// Error type for the Kytos topology adaptor.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured topology endpoint is not a valid URL.
    #[error("invalid topology endpoint `{0}`: {1}")]
    InvalidEndpoint(String, url::ParseError),

    /// The request could not be completed (connection failure or timeout).
    #[error("topology request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The controller answered with a non-success status.
    #[error("controller answered with status {0}")]
    Status(u16),

    /// The response body is not JSON.
    #[error("topology response is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body has no `topology` member.
    #[error("topology response has no `topology` member")]
    MissingTopology,
}

impl TopologyAdaptorError for Error {
    fn kind(&self) -> TopologyAdaptorErrorKind {
        match self {
            Self::InvalidEndpoint(..) => TopologyAdaptorErrorKind::Configuration,
            Self::Request(e) if e.is_builder() => TopologyAdaptorErrorKind::Configuration,
            Self::Request(_) | Self::Status(_) => TopologyAdaptorErrorKind::Unavailable,
            Self::Json(_) | Self::MissingTopology => TopologyAdaptorErrorKind::Malformed,
        }
    }
}
