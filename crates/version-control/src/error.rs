//! Outcome taxonomy of the conversion pipeline.

use sdx_topology::{ConversionError, TopologyAdaptorError, TopologyAdaptorErrorKind};
use sdx_validation::{ValidationGatewayError, ValidationGatewayErrorKind};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Why an engine operation did not produce a topology.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    /// Version control is inactive or the notification is not actionable.
    #[error("No SDX Topology loaded")]
    NotReady,

    /// A collaborator could not be reached or did not answer in time.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A collaborator endpoint is missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The raw topology could not be converted.
    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    /// The validator rejected the candidate topology.
    #[error("validator rejected topology with status {status}")]
    ValidationRejected {
        /// Status returned by the validator.
        status: u16,

        /// Detail returned by the validator.
        detail: Value,
    },

    /// An exchange identifier has no controller counterpart, or the reverse.
    #[error("unknown identifier {0}")]
    UnknownIdentifier(String),
}

impl EngineError {
    /// HTTP status reported for this outcome.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotReady | Self::Conversion(_) => 401,
            Self::UpstreamUnavailable(_) => 503,
            Self::Configuration(_) => 500,
            Self::ValidationRejected { status, .. } => *status,
            Self::UnknownIdentifier(_) => 400,
        }
    }

    /// JSON detail reported for this outcome. The validator's own detail is
    /// passed through unmodified.
    #[must_use]
    pub fn detail(&self) -> Value {
        match self {
            Self::ValidationRejected { detail, .. } => detail.clone(),
            other => Value::String(other.to_string()),
        }
    }

    pub(crate) fn from_adaptor<E: TopologyAdaptorError>(error: &E) -> Self {
        match error.kind() {
            TopologyAdaptorErrorKind::Configuration => Self::Configuration(error.to_string()),
            TopologyAdaptorErrorKind::Unavailable => Self::UpstreamUnavailable(error.to_string()),
            TopologyAdaptorErrorKind::Malformed => {
                Self::Conversion(ConversionError::Malformed(error.to_string()))
            }
        }
    }

    pub(crate) fn from_validator<E: ValidationGatewayError>(error: &E) -> Self {
        match error.kind() {
            ValidationGatewayErrorKind::Configuration => Self::Configuration(error.to_string()),
            ValidationGatewayErrorKind::Unavailable => {
                Self::UpstreamUnavailable(error.to_string())
            }
        }
    }

    /// Log as an operational or a data quality incident.
    pub(crate) fn trace(&self, context: &str) {
        match self {
            Self::Configuration(_) | Self::UpstreamUnavailable(_) => {
                error!("{context}: {self}");
            }
            Self::Conversion(_) | Self::ValidationRejected { .. } => {
                warn!("{context}: {self}");
            }
            Self::NotReady | Self::UnknownIdentifier(_) => {}
        }
    }
}
