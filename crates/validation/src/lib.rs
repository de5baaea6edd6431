//! Abstract interface for submitting candidate SDX topologies to an external
//! validation service, with an HTTP implementation.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod http;

pub use error::Error;
pub use http::{DEFAULT_TIMEOUT, HttpValidationGateway, HttpValidationGatewayOptions};

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Outcome of a validation request the service actually answered.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// The service accepted the document.
    Accepted {
        /// HTTP status returned by the service.
        status: u16,

        /// Response body, untouched.
        detail: Value,
    },

    /// The service rejected the document.
    Rejected {
        /// HTTP status returned by the service.
        status: u16,

        /// Response body, untouched.
        detail: Value,
    },
}

impl Verdict {
    /// Whether the document was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// HTTP status returned by the service.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Accepted { status, .. } | Self::Rejected { status, .. } => *status,
        }
    }

    /// Response body returned by the service.
    #[must_use]
    pub const fn detail(&self) -> &Value {
        match self {
            Self::Accepted { detail, .. } | Self::Rejected { detail, .. } => detail,
        }
    }
}

/// The kind of validation gateway error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationGatewayErrorKind {
    /// The validator endpoint is missing or malformed.
    Configuration,

    /// The validator could not be reached or did not answer in time.
    Unavailable,
}

impl Display for ValidationGatewayErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Marker trait for `ValidationGateway` errors
pub trait ValidationGatewayError: Debug + StdError + Send + Sync {
    /// Returns the kind of this error
    fn kind(&self) -> ValidationGatewayErrorKind;
}

/// Abstract interface to an external SDX topology validator.
///
/// Implementations never turn a failure to reach the service into an
/// acceptance.
#[async_trait]
pub trait ValidationGateway
where
    Self: Send + Sync + 'static,
{
    /// The error type for this gateway.
    type Error: ValidationGatewayError;

    /// Submit `document` for validation.
    async fn validate(&self, document: &Value) -> Result<Verdict, Self::Error>;
}
