use thiserror::Error;

use crate::{ValidationGatewayError, ValidationGatewayErrorKind};

/// Error type for the HTTP validation gateway.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured validator endpoint is not a valid URL.
    #[error("invalid validator endpoint `{0}`: {1}")]
    InvalidEndpoint(String, url::ParseError),

    /// The request could not be completed (connection failure or timeout).
    #[error("validation request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl ValidationGatewayError for Error {
    fn kind(&self) -> ValidationGatewayErrorKind {
        match self {
            Self::InvalidEndpoint(..) => ValidationGatewayErrorKind::Configuration,
            Self::Request(e) if e.is_builder() => ValidationGatewayErrorKind::Configuration,
            Self::Request(_) => ValidationGatewayErrorKind::Unavailable,
        }
    }
}
