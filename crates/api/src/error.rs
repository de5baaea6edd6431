use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sdx_version_control::EngineError;
use serde_json::json;
use thiserror::Error;

/// The result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The engine could not serve the request.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A required request attribute is absent.
    #[error("missing attribute {0}")]
    MissingAttribute(&'static str),

    /// A circuit endpoint names a port the committed topology does not have.
    #[error("unknown value for {attribute}.port_id ({port_id})")]
    UnknownPort {
        /// The endpoint attribute (`uni_a` or `uni_z`).
        attribute: &'static str,

        /// The port id as received.
        port_id: String,
    },

    /// The controller did not create the circuit.
    #[error("{0}")]
    Provisioning(String),

    /// A response document could not be rendered.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Engine(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MissingAttribute(_) | Self::UnknownPort { .. } | Self::Provisioning(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Engine(e) => (status, Json(e.detail())).into_response(),
            other => (status, Json(json!({"result": other.to_string()}))).into_response(),
        }
    }
}
