//! Error types for the mock topology adaptor implementation.

use sdx_topology::{TopologyAdaptorError, TopologyAdaptorErrorKind};
use thiserror::Error;

/// Error type for the mock topology adaptor implementation.
#[derive(Debug, Error)]
pub enum Error {
    /// A failure injected by the test.
    #[error("injected {0} failure")]
    Injected(TopologyAdaptorErrorKind),

    /// Error when loading or parsing the topology file.
    #[error("Topology file error: {0}")]
    TopologyFile(String),
}

impl TopologyAdaptorError for Error {
    fn kind(&self) -> TopologyAdaptorErrorKind {
        match self {
            Self::Injected(kind) => *kind,
            Self::TopologyFile(_) => TopologyAdaptorErrorKind::Malformed,
        }
    }
}
