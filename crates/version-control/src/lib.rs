//! Versioned publication of the controller topology as an SDX topology.
//!
//! The [`TopologyEngine`] owns the version counter and the last committed
//! topology. Every change notification runs through one serialized pipeline:
//! classify, fetch, convert, validate, commit.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod config;
mod engine;
mod error;
mod notification;
mod store;
mod version;

pub use config::{
    DEFAULT_FETCH_TIMEOUT, DEFAULT_MODEL_VERSION, DEFAULT_VALIDATION_TIMEOUT, EngineConfig,
    ExchangeConfig,
};
pub use engine::TopologyEngine;
pub use error::{EngineError, Result};
pub use notification::{
    ADMINISTRATIVE_EVENTS, ChangeNotification, LifecycleSignal, NotificationKind,
    OPERATIONAL_EVENTS, TOPOLOGY_LOADED_EVENT, TOPOLOGY_UNLOADED_EVENT,
};
pub use store::{CommittedTopology, TopologySnapshotStore};
pub use version::{Classification, TIMESTAMP_FORMAT, VersionController, VersionState};
