//! Translation of a raw controller topology into an SDX topology snapshot.
//!
//! Every canonical identifier is derived from the stable controller
//! identifiers (dpids, interface ids, port numbers) and every output sequence
//! is sorted by URN, so the result never depends on the order in which the
//! controller listed its elements.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::ConversionError;
use crate::mapping::IdentifierMapping;
use crate::model::{
    Link, Location, Node, Port, PortServices, Service, State, Status, TopologySnapshot,
    VlanService,
};
use crate::raw::{
    KytosEndpoint, KytosInterface, KytosLink, KytosSwitch, RawTopology, metadata_f64,
    metadata_str,
};
use crate::urn::{UrnKind, local_segment, urn};

const DEFAULT_MTU: u32 = 1500;
const DEFAULT_VLAN_RANGE: [u16; 2] = [1, 4095];
const INTRA_LINK: &str = "intra";
const L2VPN_PTP: &str = "l2vpn-ptp";

/// Timestamp carried by the placeholder topology.
pub const PLACEHOLDER_TIMESTAMP: &str = "2000-01-01T00:00:00Z";

/// Identity of the exchange publishing the topology.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeMetadata {
    /// Exchange name, used as the URN namespace.
    pub name: String,

    /// Exchange URL, used for the topology id and service ownership.
    pub url: String,

    /// Names of every exchange in the federation. Inter-exchange ports may only
    /// point at ports namespaced by one of these.
    pub names: Vec<String>,

    /// URLs of every exchange in the federation.
    pub urls: Vec<String>,
}

/// Result of a successful conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    /// The candidate topology.
    pub snapshot: TopologySnapshot,

    /// Identifier tables for exactly this candidate.
    pub mapping: IdentifierMapping,
}

/// Converts raw controller topologies for one exchange.
#[derive(Clone, Debug)]
pub struct TopologyConverter {
    exchange: ExchangeMetadata,
    model_version: String,
}

struct PortRef {
    node_local: String,
    port_number: u64,
    urn: String,
    speed: Option<f64>,
}

impl TopologyConverter {
    /// Create a converter for `exchange` producing documents of `model_version`.
    #[must_use]
    pub fn new(exchange: ExchangeMetadata, model_version: impl Into<String>) -> Self {
        Self {
            exchange,
            model_version: model_version.into(),
        }
    }

    /// The topology served before any successful conversion: version 0, no
    /// nodes, no links, no services.
    #[must_use]
    pub fn placeholder(&self) -> TopologySnapshot {
        TopologySnapshot {
            id: crate::urn::topology_id(&self.exchange.url),
            name: self.exchange.name.clone(),
            version: 0,
            model_version: self.model_version.clone(),
            timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
            nodes: Vec::new(),
            links: Vec::new(),
            services: Vec::new(),
        }
    }

    /// Convert `raw` into a snapshot carrying `version` and `timestamp` verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] if the raw document is malformed, lacks a
    /// required field, has a link to an unknown interface, or would produce
    /// colliding identifiers.
    pub fn convert(
        &self,
        raw: &RawTopology,
        version: u64,
        timestamp: &str,
    ) -> Result<Conversion, ConversionError> {
        let topology = raw.parse()?;
        let mut mapping = IdentifierMapping::new();
        let mut ports_by_interface = BTreeMap::new();

        let mut nodes = topology
            .switches
            .iter()
            .map(|(key, switch)| {
                self.convert_switch(key, switch, &mut mapping, &mut ports_by_interface)
            })
            .collect::<Result<Vec<_>, _>>()?;
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut links = topology
            .links
            .iter()
            .map(|(key, link)| self.convert_link(key, link, &mut mapping, &ports_by_interface))
            .collect::<Result<Vec<_>, _>>()?;
        links.sort_by(|a, b| a.id.cmp(&b.id));

        let services = vec![Service {
            id: urn(UrnKind::Service, &self.exchange.name, L2VPN_PTP),
            service_type: L2VPN_PTP.to_string(),
            owner: self.exchange.url.clone(),
        }];

        let snapshot = TopologySnapshot {
            id: crate::urn::topology_id(&self.exchange.url),
            name: self.exchange.name.clone(),
            version,
            model_version: self.model_version.clone(),
            timestamp: timestamp.to_string(),
            nodes,
            links,
            services,
        };

        Ok(Conversion { snapshot, mapping })
    }

    fn convert_switch(
        &self,
        key: &str,
        switch: &KytosSwitch,
        mapping: &mut IdentifierMapping,
        ports_by_interface: &mut BTreeMap<String, PortRef>,
    ) -> Result<Node, ConversionError> {
        let dpid = non_empty(switch.dpid.as_deref())
            .or_else(|| non_empty(switch.id.as_deref()))
            .ok_or_else(|| ConversionError::MissingField {
                element: format!("switch {key}"),
                field: "id",
            })?;

        let node_name = non_empty(switch.name.as_deref()).unwrap_or(dpid);
        let node_local = local_segment(node_name);
        let node_urn = urn(UrnKind::Node, &self.exchange.name, &node_local);
        mapping.insert(dpid, node_urn.clone())?;

        let mut ports = switch
            .interfaces
            .iter()
            .map(|(iface_key, interface)| {
                let (interface_id, port) =
                    self.convert_interface(iface_key, interface, &node_local, &node_urn)?;
                mapping.insert(interface_id, port.id.clone())?;
                ports_by_interface.insert(
                    interface_id.to_string(),
                    PortRef {
                        node_local: node_local.clone(),
                        port_number: interface.port_number.unwrap_or_default(),
                        urn: port.id.clone(),
                        speed: interface.speed,
                    },
                );
                Ok::<_, ConversionError>(port)
            })
            .collect::<Result<Vec<_>, ConversionError>>()?;
        ports.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(Node {
            id: node_urn,
            name: node_name.to_string(),
            location: location(&switch.metadata),
            ports,
        })
    }

    fn convert_interface<'a>(
        &self,
        key: &str,
        interface: &'a KytosInterface,
        node_local: &str,
        node_urn: &str,
    ) -> Result<(&'a str, Port), ConversionError> {
        let interface_id =
            non_empty(interface.id.as_deref()).ok_or_else(|| ConversionError::MissingField {
                element: format!("interface {key}"),
                field: "id",
            })?;
        let port_number = interface
            .port_number
            .ok_or_else(|| ConversionError::MissingField {
                element: format!("interface {interface_id}"),
                field: "port_number",
            })?;

        let port_local = format!("{node_local}:{port_number}");
        let port = Port {
            id: urn(UrnKind::Port, &self.exchange.name, &port_local),
            name: non_empty(interface.name.as_deref())
                .map_or_else(|| port_local.clone(), str::to_string),
            node: node_urn.to_string(),
            port_type: port_type(interface.speed).to_string(),
            mtu: interface.mtu.unwrap_or(DEFAULT_MTU),
            status: Status::from_active(interface.active),
            state: State::from_enabled(interface.enabled),
            nni: self.nni(&interface.metadata),
            services: PortServices {
                l2vpn_ptp: VlanService {
                    vlan_range: vlan_range(&interface.metadata),
                },
            },
        };

        Ok((interface_id, port))
    }

    fn convert_link(
        &self,
        key: &str,
        link: &KytosLink,
        mapping: &mut IdentifierMapping,
        ports_by_interface: &BTreeMap<String, PortRef>,
    ) -> Result<Link, ConversionError> {
        let link_id = non_empty(link.id.as_deref()).ok_or_else(|| ConversionError::MissingField {
            element: format!("link {key}"),
            field: "id",
        })?;

        let a = resolve_endpoint(
            ports_by_interface,
            link_id,
            link.endpoint_a.as_ref(),
            "endpoint_a",
        )?;
        let b = resolve_endpoint(
            ports_by_interface,
            link_id,
            link.endpoint_b.as_ref(),
            "endpoint_b",
        )?;
        let (a, b) = if a.urn <= b.urn { (a, b) } else { (b, a) };

        let name = format!(
            "{}/{}_{}/{}",
            a.node_local, a.port_number, b.node_local, b.port_number
        );
        let link_urn = urn(UrnKind::Link, &self.exchange.name, &name);
        mapping.insert(link_id, link_urn.clone())?;

        let bandwidth = match (a.speed, b.speed) {
            (Some(x), Some(y)) => gbps(x.min(y)),
            (Some(x), None) | (None, Some(x)) => gbps(x),
            (None, None) => 0.0,
        };

        Ok(Link {
            id: link_urn,
            name,
            ports: vec![a.urn.clone(), b.urn.clone()],
            link_type: INTRA_LINK.to_string(),
            bandwidth,
            residual_bandwidth: metadata_f64(&link.metadata, "residual_bandwidth")
                .unwrap_or(bandwidth),
            latency: metadata_f64(&link.metadata, "latency").unwrap_or(0.0),
            packet_loss: metadata_f64(&link.metadata, "packet_loss").unwrap_or(0.0),
            availability: metadata_f64(&link.metadata, "availability").unwrap_or(100.0),
            status: Status::from_active(link.active),
            state: State::from_enabled(link.enabled),
        })
    }

    /// Peer port URN for an inter-exchange port, if the metadata names one of
    /// the federated exchanges.
    fn nni(&self, metadata: &Map<String, Value>) -> String {
        metadata_str(metadata, "sdx_nni")
            .filter(|peer| {
                matches!(
                    crate::urn::parse(peer),
                    Some((UrnKind::Port, namespace)) if self.exchange.names.iter().any(|n| n == namespace)
                )
            })
            .unwrap_or_default()
            .to_string()
    }
}

fn resolve_endpoint<'m>(
    ports_by_interface: &'m BTreeMap<String, PortRef>,
    link_id: &str,
    endpoint: Option<&KytosEndpoint>,
    field: &'static str,
) -> Result<&'m PortRef, ConversionError> {
    let interface = endpoint
        .and_then(|e| non_empty(e.id.as_deref()))
        .ok_or_else(|| ConversionError::MissingField {
            element: format!("link {link_id}"),
            field,
        })?;

    ports_by_interface
        .get(interface)
        .ok_or_else(|| ConversionError::DanglingEndpoint {
            link: link_id.to_string(),
            interface: interface.to_string(),
        })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Controller speeds are in bytes per second.
fn gbps(bytes_per_second: f64) -> f64 {
    bytes_per_second * 8.0 / 1e9
}

fn port_type(speed: Option<f64>) -> &'static str {
    let Some(speed) = speed else {
        return "Other";
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let class = gbps(speed).round() as u64;
    match class {
        1 => "1GE",
        10 => "10GE",
        25 => "25GE",
        40 => "40GE",
        50 => "50GE",
        100 => "100GE",
        400 => "400GE",
        _ => "Other",
    }
}

fn location(metadata: &Map<String, Value>) -> Location {
    Location {
        address: metadata_str(metadata, "address")
            .unwrap_or_default()
            .to_string(),
        latitude: metadata_f64(metadata, "lat").unwrap_or_default(),
        longitude: metadata_f64(metadata, "lng").unwrap_or_default(),
        iso3166_2_lvl4: metadata_str(metadata, "iso3166_2_lvl4")
            .unwrap_or_default()
            .to_string(),
    }
}

fn vlan_range(metadata: &Map<String, Value>) -> Vec<[u16; 2]> {
    metadata
        .get("vlan_range")
        .and_then(|v| serde_json::from_value::<Vec<[u16; 2]>>(v.clone()).ok())
        .filter(|ranges| !ranges.is_empty())
        .unwrap_or_else(|| vec![DEFAULT_VLAN_RANGE])
}
