use axum::Json;
use chrono::Utc;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use sdx_version_control::{
    ChangeNotification, LifecycleSignal, NotificationKind, TIMESTAMP_FORMAT,
};
use serde_json::json;
use tracing::debug;

use super::pipeline_response;
use crate::{ApiContext, EventRequest};

/// Consumes a controller event: lifecycle signals change version control,
/// topology changes run the pipeline, anything else is acknowledged and
/// dropped.
pub(crate) async fn listen_event_handler<A, V, P>(
    State(ApiContext { engine, .. }): State<ApiContext<A, V, P>>,
    Json(event): Json<EventRequest>,
) -> Response
where
    A: TopologyAdaptor,
    V: ValidationGateway,
    P: Provisioner,
{
    if let Some(signal) = LifecycleSignal::from_event_name(&event.name) {
        engine.signal(signal).await;
        return Json(json!({
            "event": event.name,
            "version_control": engine.version_state(),
        }))
        .into_response();
    }

    // events are stamped on arrival unless the sender says when they happened
    let timestamp = event
        .timestamp
        .unwrap_or_else(|| Utc::now().format(TIMESTAMP_FORMAT).to_string());
    let notification = ChangeNotification::from_event(event.name, Some(timestamp), event.content);
    if notification.kind == NotificationKind::Ignored {
        debug!("not an action event: {}", notification.name);
        return Json(json!({"event": "not action event"})).into_response();
    }

    let result = engine.run_conversion(&notification).await;
    pipeline_response(&engine, result)
}
