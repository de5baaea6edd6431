//! Request bodies accepted at the REST boundary.

use serde::Deserialize;
use serde_json::Value;

/// Body of `v1/validate_sdx_topology`.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    /// Document to validate. The placeholder topology is validated when absent.
    #[serde(default)]
    pub sdx_topology: Option<Value>,
}

/// Body of `v1/listen_event`.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    /// Controller event name.
    pub name: String,

    /// Event content, e.g. `{"dpid": ...}`.
    #[serde(default)]
    pub content: Option<Value>,

    /// Time the controller observed the event. Defaults to the time of
    /// arrival.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One end of a requested circuit, in exchange terms.
#[derive(Debug, Default, Deserialize)]
pub struct UniRequest {
    /// Exchange port URN.
    #[serde(default)]
    pub port_id: Option<String>,

    /// VLAN tag, passed through untouched.
    #[serde(default)]
    pub tag: Option<Value>,
}
