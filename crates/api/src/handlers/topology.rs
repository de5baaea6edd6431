use axum::extract::{Path, State};
use axum::response::Response;
use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use sdx_version_control::ChangeNotification;

use super::pipeline_response;
use crate::ApiContext;

/// Returns the candidate topology for an event without committing it.
pub(crate) async fn convert_topology_handler<A, V, P>(
    State(ApiContext { engine, .. }): State<ApiContext<A, V, P>>,
    Path((event_type, event_timestamp)): Path<(String, String)>,
) -> Response
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    let notification = ChangeNotification::from_event_type(&event_type, event_timestamp);
    let result = engine.preview(&notification).await;

    pipeline_response(&engine, result)
}

/// Runs the full pipeline for an event and returns the committed topology.
pub(crate) async fn post_sdx_topology_handler<A, V, P>(
    State(ApiContext { engine, .. }): State<ApiContext<A, V, P>>,
    Path((event_type, event_timestamp)): Path<(String, String)>,
) -> Response
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    let notification = ChangeNotification::from_event_type(&event_type, event_timestamp);
    let result = engine.run_conversion(&notification).await;

    pipeline_response(&engine, result)
}
