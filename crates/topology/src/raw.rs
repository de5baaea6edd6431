//! Raw controller topology as served by the Kytos topology API.
//!
//! The payload is kept as untyped JSON until conversion so that a malformed
//! document surfaces as a [`ConversionError`] rather than a transport error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConversionError;

/// The controller's topology document (the `topology` member of the API response).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTopology(Value);

impl RawTopology {
    /// Wrap an already extracted topology document.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Extract the topology document from a full API response (`{"topology": {...}}`).
    ///
    /// Returns `None` if the response has no `topology` member.
    #[must_use]
    pub fn from_response(mut response: Value) -> Option<Self> {
        response
            .as_object_mut()
            .and_then(|object| object.remove("topology"))
            .map(Self)
    }

    /// Borrow the underlying JSON document.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    pub(crate) fn parse(&self) -> Result<KytosTopology, ConversionError> {
        KytosTopology::deserialize(&self.0).map_err(|e| ConversionError::Malformed(e.to_string()))
    }
}

impl From<Value> for RawTopology {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct KytosTopology {
    #[serde(default)]
    pub switches: BTreeMap<String, KytosSwitch>,
    #[serde(default)]
    pub links: BTreeMap<String, KytosLink>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KytosSwitch {
    pub id: Option<String>,
    pub dpid: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub interfaces: BTreeMap<String, KytosInterface>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KytosInterface {
    pub id: Option<String>,
    pub name: Option<String>,
    pub port_number: Option<u64>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub active: bool,
    pub speed: Option<f64>,
    pub mtu: Option<u32>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KytosLink {
    pub id: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub endpoint_a: Option<KytosEndpoint>,
    pub endpoint_b: Option<KytosEndpoint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct KytosEndpoint {
    pub id: Option<String>,
}

/// Read a metadata entry as a float, accepting numbers and numeric strings.
pub(crate) fn metadata_f64(metadata: &Map<String, Value>, key: &str) -> Option<f64> {
    match metadata.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn metadata_str<'a>(metadata: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    metadata.get(key).and_then(Value::as_str)
}
