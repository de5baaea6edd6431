//! Error types for topology conversion and raw topology adaptors.

use std::error::Error;
use std::fmt::{self, Debug};
use thiserror::Error as ThisError;

/// Errors raised while translating a raw controller topology into the SDX model.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConversionError {
    /// The raw payload does not have the shape of a controller topology.
    #[error("malformed raw topology: {0}")]
    Malformed(String),

    /// A required raw field is absent or empty.
    #[error("missing required field `{field}` on {element}")]
    MissingField {
        /// The raw element (switch, interface or link) lacking the field.
        element: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A link endpoint references an interface that is not part of the topology.
    #[error("link {link} references unknown interface {interface}")]
    DanglingEndpoint {
        /// Controller id of the link.
        link: String,
        /// Controller id of the missing interface.
        interface: String,
    },

    /// Two distinct identifiers would collapse onto the same canonical id.
    #[error("identifier {0} is not unique in the converted topology")]
    DuplicateIdentifier(String),
}

/// Marker trait for `TopologyAdaptor` errors
pub trait TopologyAdaptorError: Debug + Error + Send + Sync {
    /// Returns the kind of this error
    fn kind(&self) -> TopologyAdaptorErrorKind;
}

/// The kind of topology adaptor error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TopologyAdaptorErrorKind {
    /// The adaptor endpoint is missing or malformed.
    Configuration,

    /// The controller could not be reached, timed out or answered with a failure.
    Unavailable,

    /// The controller answered, but not with a topology document.
    Malformed,
}

impl fmt::Display for TopologyAdaptorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
