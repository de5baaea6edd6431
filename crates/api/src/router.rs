//! Router building logic.

use axum::Router;
use axum::routing::{get, post};
use sdx_provisioning::Provisioner;
use sdx_topology::TopologyAdaptor;
use sdx_validation::ValidationGateway;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::ApiContext;
use crate::handlers::{
    convert_topology_handler, l2vpn_ptp_handler, listen_event_handler, post_sdx_topology_handler,
    validate_sdx_topology_handler, version_control_handler,
};

/// Prefix the routes are mounted under unless configured otherwise.
pub const DEFAULT_API_PREFIX: &str = "/api/amlight/sdx";

/// Router building utilities
pub struct RouterBuilder;

impl RouterBuilder {
    /// Build the service router with every route under `prefix`.
    pub fn build<A, V, P>(ctx: ApiContext<A, V, P>, prefix: &str) -> Router
    where
        A: TopologyAdaptor,
        V: ValidationGateway,
        P: Provisioner,
    {
        let routes = Router::new()
            .route("/v1/version/control", get(version_control_handler::<A, V, P>))
            .route(
                "/v1/validate_sdx_topology",
                post(validate_sdx_topology_handler::<A, V, P>),
            )
            .route(
                "/v1/convert_topology/{event_type}/{event_timestamp}",
                get(convert_topology_handler::<A, V, P>),
            )
            .route(
                "/v1/post_sdx_topology/{event_type}/{event_timestamp}",
                get(post_sdx_topology_handler::<A, V, P>),
            )
            .route("/v1/listen_event", post(listen_event_handler::<A, V, P>))
            .route("/v1/l2vpn_ptp", post(l2vpn_ptp_handler::<A, V, P>))
            .with_state(ctx);

        let prefix = normalize_prefix(prefix);
        let router = if prefix.is_empty() {
            routes
        } else {
            Router::new().nest(&prefix, routes)
        };

        router
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }
}

/// `/api/sdx/` and `api/sdx` both become `/api/sdx`; `/` becomes empty.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
