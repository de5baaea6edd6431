use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;

use crate::{ApiContext, ApiError, ValidateRequest};

/// Forwards a document to the validator and relays its answer.
pub(crate) async fn validate_sdx_topology_handler<A, V, P>(
    State(ApiContext { engine, .. }): State<ApiContext<A, V, P>>,
    Json(request): Json<ValidateRequest>,
) -> Result<Response, ApiError>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    let document = match request.sdx_topology {
        Some(document) => document,
        None => serde_json::to_value(engine.placeholder())?,
    };

    let verdict = engine.validate_only(&document).await?;
    let status = StatusCode::from_u16(verdict.status()).unwrap_or(StatusCode::BAD_GATEWAY);

    Ok((status, Json(verdict.detail().clone())).into_response())
}
