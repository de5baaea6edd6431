//! Error types for the mock provisioner.

use sdx_provisioning::{ProvisionerError, ProvisionerErrorKind};
use thiserror::Error;

/// Error type for the mock provisioner.
#[derive(Debug, Error)]
pub enum Error {
    /// A failure injected by the test.
    #[error("Request to Kytos failed: injected {0} failure")]
    Injected(ProvisionerErrorKind),
}

impl ProvisionerError for Error {
    fn kind(&self) -> ProvisionerErrorKind {
        match self {
            Self::Injected(kind) => *kind,
        }
    }
}
