//! Abstract interface for fetching the controller's raw topology.

use async_trait::async_trait;

use crate::error::TopologyAdaptorError;
use crate::raw::RawTopology;

/// Source of the controller's current topology graph.
#[async_trait]
pub trait TopologyAdaptor
where
    Self: Send + Sync + 'static,
{
    /// The error type for this adaptor.
    type Error: TopologyAdaptorError;

    /// Fetch the controller's current topology.
    async fn get_topology(&self) -> Result<RawTopology, Self::Error>;
}
