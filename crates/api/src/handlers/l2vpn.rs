use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sdx_provisioning::{
    EvcEndpoint, EvcRequest, Provisioner, ProvisionerError, ProvisionerErrorKind,
};
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use sdx_version_control::TopologyEngine;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::{ApiContext, ApiError, UniRequest};

/// Creates a point-to-point circuit between two exchange ports.
///
/// Port URNs are translated through the committed mapping before anything is
/// sent to the controller.
pub(crate) async fn l2vpn_ptp_handler<A, V, P>(
    State(ApiContext {
        engine,
        provisioner,
    }): State<ApiContext<A, V, P>>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    let request = evc_request(&engine, &body).inspect_err(|e| {
        warn!("EVC creation failed: {e}. request={body}");
    })?;

    match provisioner.create_evc(&request).await {
        Ok(provisioned) => {
            info!("EVC created with status {}", provisioned.status);
            let status = StatusCode::from_u16(provisioned.status).unwrap_or(StatusCode::OK);
            Ok((status, Json(provisioned.body)).into_response())
        }
        Err(e) => {
            match e.kind() {
                ProvisionerErrorKind::Configuration | ProvisionerErrorKind::Unavailable => {
                    error!("EVC creation failed on Kytos: {e}");
                }
                ProvisionerErrorKind::Rejected => warn!("EVC creation failed on Kytos: {e}"),
            }
            Err(ApiError::Provisioning(e.to_string()))
        }
    }
}

fn evc_request<A, V>(engine: &TopologyEngine<A, V>, body: &Value) -> Result<EvcRequest, ApiError>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
{
    let name = attribute(body, "name")?.clone();
    let uni_a = endpoint(engine, body, "uni_a")?;
    let uni_z = endpoint(engine, body, "uni_z")?;
    let dynamic_backup_path = attribute(body, "dynamic_backup_path")?.clone();

    Ok(EvcRequest {
        name,
        uni_a,
        uni_z,
        dynamic_backup_path,
    })
}

fn attribute<'a>(body: &'a Value, name: &'static str) -> Result<&'a Value, ApiError> {
    body.get(name).ok_or(ApiError::MissingAttribute(name))
}

fn endpoint<A, V>(
    engine: &TopologyEngine<A, V>,
    body: &Value,
    name: &'static str,
) -> Result<EvcEndpoint, ApiError>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
{
    let uni: UniRequest = serde_json::from_value(attribute(body, name)?.clone()).unwrap_or_default();

    let unknown = |port_id: Option<&str>| ApiError::UnknownPort {
        attribute: name,
        port_id: port_id.unwrap_or("null").to_string(),
    };
    let port_id = uni
        .port_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| unknown(uni.port_id.as_deref()))?;
    let interface_id = engine
        .translate_to_controller_id(port_id)
        .map_err(|_| unknown(Some(port_id)))?;

    Ok(EvcEndpoint {
        interface_id,
        tag: uni.tag,
    })
}
