use std::sync::Arc;

use axum::Router;
use sdx_api::{ApiContext, RouterBuilder};
use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use sdx_version_control::TopologyEngine;
use tracing::info;

use crate::config::SdxConfig;
use crate::error::Result;

/// Wire the engine with version control loaded and return the API router.
pub async fn build_router<A, V, P>(
    adaptor: A,
    validator: V,
    provisioner: P,
    config: &SdxConfig,
) -> Result<Router>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    let engine = TopologyEngine::new(adaptor, validator, &config.exchange, config.engine.clone())?;
    engine.load().await;
    info!("version control loaded: {:?}", engine.version_state());

    Ok(RouterBuilder::build(
        ApiContext::new(Arc::new(engine), provisioner),
        &config.api_prefix,
    ))
}
