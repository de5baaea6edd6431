//! Error types for the mock validation gateway.

use sdx_validation::{ValidationGatewayError, ValidationGatewayErrorKind};
use thiserror::Error;

/// Error type for the mock validation gateway.
#[derive(Debug, Error)]
pub enum Error {
    /// A failure injected by the test.
    #[error("injected {0} failure")]
    Injected(ValidationGatewayErrorKind),
}

impl ValidationGatewayError for Error {
    fn kind(&self) -> ValidationGatewayErrorKind {
        match self {
            Self::Injected(kind) => *kind,
        }
    }
}
