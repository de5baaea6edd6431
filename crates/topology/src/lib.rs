//! SDX topology model and conversion from the Kytos controller topology.
//!
//! This crate provides:
//! - The canonical SDX topology records ([`TopologySnapshot`] and friends)
//! - `urn:sdx:` identifier construction and parsing
//! - The [`TopologyConverter`] turning a [`RawTopology`] into a snapshot
//!   together with its [`IdentifierMapping`]
//! - The [`TopologyAdaptor`] trait implemented by controller clients
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod adaptor;
pub mod converter;
pub mod error;
pub mod mapping;
pub mod model;
pub mod raw;
pub mod urn;

pub use adaptor::TopologyAdaptor;
pub use converter::{Conversion, ExchangeMetadata, PLACEHOLDER_TIMESTAMP, TopologyConverter};
pub use error::{ConversionError, TopologyAdaptorError, TopologyAdaptorErrorKind};
pub use mapping::IdentifierMapping;
pub use model::{
    Link, Location, Node, Port, PortServices, Service, State, Status, TopologySnapshot,
    VlanService,
};
pub use raw::RawTopology;
pub use urn::UrnKind;
