//! Last committed topology and its identifier tables.

use std::sync::Arc;

use parking_lot::RwLock;
use sdx_topology::{IdentifierMapping, TopologySnapshot};

use crate::error::{EngineError, Result};

/// A snapshot together with the mapping built for it.
#[derive(Clone, Debug, PartialEq)]
pub struct CommittedTopology {
    /// The published topology.
    pub snapshot: Arc<TopologySnapshot>,

    /// Identifier tables of exactly this topology.
    pub mapping: IdentifierMapping,
}

/// Holds the committed topology behind a pointer swapped on commit.
///
/// Readers clone the pointer and never observe a snapshot without its mapping.
#[derive(Debug)]
pub struct TopologySnapshotStore {
    committed: RwLock<Arc<CommittedTopology>>,
}

impl TopologySnapshotStore {
    /// A store serving `placeholder` with an empty mapping.
    #[must_use]
    pub fn new(placeholder: TopologySnapshot) -> Self {
        Self {
            committed: RwLock::new(Arc::new(CommittedTopology {
                snapshot: Arc::new(placeholder),
                mapping: IdentifierMapping::new(),
            })),
        }
    }

    /// Replace the committed topology and mapping together.
    pub fn commit(
        &self,
        snapshot: TopologySnapshot,
        mapping: IdentifierMapping,
    ) -> Arc<TopologySnapshot> {
        let snapshot = Arc::new(snapshot);
        let committed = Arc::new(CommittedTopology {
            snapshot: Arc::clone(&snapshot),
            mapping,
        });
        *self.committed.write() = committed;

        snapshot
    }

    /// The committed topology and mapping.
    #[must_use]
    pub fn committed(&self) -> Arc<CommittedTopology> {
        Arc::clone(&self.committed.read())
    }

    /// The committed snapshot, or the placeholder before any commit.
    #[must_use]
    pub fn current(&self) -> Arc<TopologySnapshot> {
        Arc::clone(&self.committed.read().snapshot)
    }

    /// Controller id published as `exchange_id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownIdentifier`] if the committed mapping has
    /// no such exchange id.
    pub fn translate_to_controller_id(&self, exchange_id: &str) -> Result<String> {
        self.committed
            .read()
            .mapping
            .to_controller_id(exchange_id)
            .map(ToString::to_string)
            .ok_or_else(|| EngineError::UnknownIdentifier(exchange_id.to_string()))
    }

    /// Exchange id under which `controller_id` is published.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownIdentifier`] if the committed mapping has
    /// no such controller id.
    pub fn translate_to_exchange_id(&self, controller_id: &str) -> Result<String> {
        self.committed
            .read()
            .mapping
            .to_exchange_id(controller_id)
            .map(ToString::to_string)
            .ok_or_else(|| EngineError::UnknownIdentifier(controller_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use sdx_topology::{ExchangeMetadata, TopologyConverter};

    use super::*;

    fn placeholder() -> TopologySnapshot {
        TopologyConverter::new(
            ExchangeMetadata {
                name: "sax.net".to_string(),
                url: "sax.net".to_string(),
                names: vec!["sax.net".to_string()],
                urls: vec!["sax.net".to_string()],
            },
            "2.0.0",
        )
        .placeholder()
    }

    #[test]
    fn test_commit_swaps_snapshot_and_mapping() {
        let store = TopologySnapshotStore::new(placeholder());
        let before = store.committed();
        assert_eq!(store.current().version, 0);
        assert!(matches!(
            store.translate_to_controller_id("urn:sdx:port:sax.net:Sax01:40"),
            Err(EngineError::UnknownIdentifier(_))
        ));

        let mut snapshot = placeholder();
        snapshot.version = 1;
        let mut mapping = IdentifierMapping::new();
        mapping
            .insert("cc:00:00:00:00:00:00:01:40", "urn:sdx:port:sax.net:Sax01:40")
            .unwrap();
        store.commit(snapshot, mapping);

        assert_eq!(store.current().version, 1);
        assert_eq!(
            store
                .translate_to_controller_id("urn:sdx:port:sax.net:Sax01:40")
                .unwrap(),
            "cc:00:00:00:00:00:00:01:40"
        );
        assert_eq!(
            store
                .translate_to_exchange_id("cc:00:00:00:00:00:00:01:40")
                .unwrap(),
            "urn:sdx:port:sax.net:Sax01:40"
        );

        // earlier readers keep the topology they were handed
        assert_eq!(before.snapshot.version, 0);
        assert!(before.mapping.is_empty());
    }
}
