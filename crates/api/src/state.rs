//! Shared handler state.

use std::sync::Arc;

use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use sdx_version_control::TopologyEngine;

/// Everything the handlers need.
pub struct ApiContext<A, V, P>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    /// The topology engine.
    pub engine: Arc<TopologyEngine<A, V>>,

    /// Circuit provisioning on the controller.
    pub provisioner: Arc<P>,
}

impl<A, V, P> ApiContext<A, V, P>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    /// Create a context.
    pub fn new(engine: Arc<TopologyEngine<A, V>>, provisioner: P) -> Self {
        Self {
            engine,
            provisioner: Arc::new(provisioner),
        }
    }
}

impl<A, V, P> Clone for ApiContext<A, V, P>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            provisioner: Arc::clone(&self.provisioner),
        }
    }
}
