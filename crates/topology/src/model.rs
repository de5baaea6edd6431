//! Canonical SDX topology records.

use serde::{Deserialize, Serialize};

/// A complete SDX topology document.
///
/// Snapshots are immutable once committed; a new snapshot replaces the old one wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    /// Topology URN (`urn:sdx:topology:<exchange url>`).
    pub id: String,

    /// Name of the exchange publishing the topology.
    pub name: String,

    /// Administrative version of the topology.
    pub version: u64,

    /// Version of the SDX data model the document follows.
    pub model_version: String,

    /// Time of the change that produced this document.
    pub timestamp: String,

    /// Nodes, ordered by id.
    pub nodes: Vec<Node>,

    /// Links, ordered by id.
    pub links: Vec<Link>,

    /// Services offered by the exchange.
    pub services: Vec<Service>,
}

/// A switch of the exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Node URN.
    pub id: String,

    /// Human readable node name.
    pub name: String,

    /// Where the node is.
    pub location: Location,

    /// Ports of the node, ordered by id.
    pub ports: Vec<Port>,
}

/// Physical location of a node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Postal address.
    pub address: String,

    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,

    /// ISO 3166-2 subdivision code.
    pub iso3166_2_lvl4: String,
}

/// Operational status of a port or link.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Carrying traffic.
    Up,
    /// Not carrying traffic.
    Down,
}

impl Status {
    pub(crate) const fn from_active(active: bool) -> Self {
        if active { Self::Up } else { Self::Down }
    }
}

/// Administrative state of a port or link.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    /// Enabled by the operator.
    Enabled,
    /// Disabled by the operator.
    Disabled,
}

impl State {
    pub(crate) const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// A switch port.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Port {
    /// Port URN.
    pub id: String,

    /// Human readable port name.
    pub name: String,

    /// URN of the node owning the port.
    pub node: String,

    /// Port speed class, e.g. `10GE`.
    #[serde(rename = "type")]
    pub port_type: String,

    /// Maximum transmission unit.
    pub mtu: u32,

    /// Operational status.
    pub status: Status,

    /// Administrative state.
    pub state: State,

    /// URN of the peer port in another exchange, empty for internal ports.
    pub nni: String,

    /// Services the port can carry.
    pub services: PortServices,
}

/// Services available on a port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortServices {
    /// Point-to-point L2VPN capability.
    #[serde(rename = "l2vpn-ptp")]
    pub l2vpn_ptp: VlanService,
}

/// VLAN ranges usable by a service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanService {
    /// Inclusive VLAN ranges.
    pub vlan_range: Vec<[u16; 2]>,
}

/// A link between two ports of the exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Link URN.
    pub id: String,

    /// Human readable link name.
    pub name: String,

    /// URNs of the two endpoints, sorted.
    pub ports: Vec<String>,

    /// Link type (`intra` for links inside the exchange).
    #[serde(rename = "type")]
    pub link_type: String,

    /// Capacity in Gbps.
    pub bandwidth: f64,

    /// Unreserved capacity in Gbps.
    pub residual_bandwidth: f64,

    /// One way latency in milliseconds.
    pub latency: f64,

    /// Packet loss percentage.
    pub packet_loss: f64,

    /// Availability percentage.
    pub availability: f64,

    /// Operational status.
    pub status: Status,

    /// Administrative state.
    pub state: State,
}

/// A service advertised by the exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Service URN.
    pub id: String,

    /// Service type, e.g. `l2vpn-ptp`.
    #[serde(rename = "type")]
    pub service_type: String,

    /// URL of the exchange offering the service.
    pub owner: String,
}
