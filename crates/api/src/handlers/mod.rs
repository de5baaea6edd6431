mod events;
mod l2vpn;
mod topology;
mod validate;
mod version;

pub(crate) use events::listen_event_handler;
pub(crate) use l2vpn::l2vpn_ptp_handler;
pub(crate) use topology::{convert_topology_handler, post_sdx_topology_handler};
pub(crate) use validate::validate_sdx_topology_handler;
pub(crate) use version::version_control_handler;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sdx_topology::{TopologyAdaptor, TopologySnapshot};
use sdx_validation::ValidationGateway;
use sdx_version_control::{EngineError, TopologyEngine};
use serde::Serialize;

use crate::ApiError;

/// Render a pipeline outcome: the topology on success, the placeholder when
/// nothing can be published, the failure detail otherwise.
fn pipeline_response<A, V, T>(
    engine: &TopologyEngine<A, V>,
    result: Result<T, EngineError>,
) -> Response
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    T: Serialize,
{
    match result {
        Ok(topology) => (StatusCode::OK, Json(topology)).into_response(),
        Err(EngineError::NotReady) => placeholder_response(engine),
        Err(e) => ApiError::from(e).into_response(),
    }
}

fn placeholder_response<A, V>(engine: &TopologyEngine<A, V>) -> Response
where
    A: TopologyAdaptor,
    V: ValidationGateway,
{
    let placeholder: TopologySnapshot = engine.placeholder();
    (
        StatusCode::from_u16(EngineError::NotReady.status_code())
            .unwrap_or(StatusCode::UNAUTHORIZED),
        Json(placeholder),
    )
        .into_response()
}
