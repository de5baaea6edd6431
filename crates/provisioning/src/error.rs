use thiserror::Error;

use crate::{ProvisionerError, ProvisionerErrorKind};

/// Error type for the HTTP provisioner.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured EVC endpoint is not a valid URL.
    #[error("invalid EVC endpoint `{0}`: {1}")]
    InvalidEndpoint(String, url::ParseError),

    /// The request timed out.
    #[error("Request to Kytos timeout: {0}")]
    Timeout(reqwest::Error),

    /// The request could not be completed.
    #[error("Request to Kytos failed: {0}")]
    Request(reqwest::Error),

    /// The controller answered with an unexpected status.
    #[error("Request to Kytos failed: {status} {body}")]
    Rejected {
        /// HTTP status returned by the controller.
        status: u16,

        /// Response text returned by the controller.
        body: String,
    },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error)
        } else {
            Self::Request(error)
        }
    }
}

impl ProvisionerError for Error {
    fn kind(&self) -> ProvisionerErrorKind {
        match self {
            Self::InvalidEndpoint(..) => ProvisionerErrorKind::Configuration,
            Self::Request(e) if e.is_builder() => ProvisionerErrorKind::Configuration,
            Self::Timeout(_) | Self::Request(_) => ProvisionerErrorKind::Unavailable,
            Self::Rejected { .. } => ProvisionerErrorKind::Rejected,
        }
    }
}
