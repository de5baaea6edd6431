//! Abstract interface for provisioning point-to-point L2VPN circuits on the
//! controller, with an HTTP implementation for the Kytos EVC API.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
mod http;

pub use error::Error;
pub use http::{DEFAULT_TIMEOUT, HttpProvisioner, HttpProvisionerOptions};

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One end of a circuit, in controller terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvcEndpoint {
    /// Controller interface id.
    pub interface_id: String,

    /// VLAN tag, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Value>,
}

/// Circuit creation request as understood by the controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvcRequest {
    /// Circuit name.
    pub name: Value,

    /// First endpoint.
    pub uni_a: EvcEndpoint,

    /// Second endpoint.
    pub uni_z: EvcEndpoint,

    /// Whether the controller may compute a backup path on its own.
    pub dynamic_backup_path: Value,
}

/// Controller answer to a successful creation request.
#[derive(Clone, Debug, PartialEq)]
pub struct Provisioned {
    /// HTTP status returned by the controller.
    pub status: u16,

    /// Response body returned by the controller.
    pub body: Value,
}

/// The kind of provisioner error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProvisionerErrorKind {
    /// The provisioning endpoint is missing or malformed.
    Configuration,

    /// The controller could not be reached or did not answer in time.
    Unavailable,

    /// The controller refused the request.
    Rejected,
}

impl Display for ProvisionerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Marker trait for `Provisioner` errors
pub trait ProvisionerError: Debug + StdError + Send + Sync {
    /// Returns the kind of this error
    fn kind(&self) -> ProvisionerErrorKind;
}

/// Abstract interface for creating circuits on the controller.
#[async_trait]
pub trait Provisioner
where
    Self: Send + Sync + 'static,
{
    /// The error type for this provisioner.
    type Error: ProvisionerError;

    /// Ask the controller to create the circuit described by `request`.
    async fn create_evc(&self, request: &EvcRequest) -> Result<Provisioned, Self::Error>;
}
