use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use sdx_version_control::ChangeNotification;
use tracing::info;

use crate::ApiContext;

const VERSION_CONTROL_GET: &str = "version/control.get";

/// Runs an administrative cycle and returns the committed topology. Every
/// failure is reported as `401` with its detail.
pub(crate) async fn version_control_handler<A, V, P>(
    State(ApiContext { engine, .. }): State<ApiContext<A, V, P>>,
) -> Response
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    info!("version control requested");

    match engine
        .run_conversion(&ChangeNotification::administrative(VERSION_CONTROL_GET))
        .await
    {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(e) => (StatusCode::UNAUTHORIZED, Json(e.detail())).into_response(),
    }
}
