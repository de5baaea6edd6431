//! Mock implementation of the topology adaptor interface for testing purposes.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use sdx_topology::{RawTopology, TopologyAdaptor, TopologyAdaptorErrorKind};
use serde_json::{Value, json};

#[derive(Debug)]
struct State {
    topology: RawTopology,
    failure: Option<TopologyAdaptorErrorKind>,
    delay: Option<Duration>,
}

/// Mock implementation of the topology adaptor interface.
///
/// Clones share state, so a test can keep a handle and change what the adaptor
/// serves after handing it to the code under test.
#[derive(Clone, Debug)]
pub struct MockTopologyAdaptor {
    state: Arc<RwLock<State>>,
    fetches: Arc<AtomicUsize>,
}

impl MockTopologyAdaptor {
    /// Create a mock serving `topology`.
    #[must_use]
    pub fn new(topology: RawTopology) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                topology,
                failure: None,
                delay: None,
            })),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock serving a topology without switches or links.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(RawTopology::new(json!({"switches": {}, "links": {}})))
    }

    /// Create a mock from a JSON file holding either a bare topology document
    /// or a full API response with a `topology` member.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid JSON
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::TopologyFile(format!("Failed to read topology file: {e}")))?;

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| Error::TopologyFile(format!("Failed to parse topology file: {e}")))?;

        let topology = if value.get("topology").is_some() {
            RawTopology::from_response(value)
                .ok_or_else(|| Error::TopologyFile("Missing topology member".to_string()))?
        } else {
            RawTopology::new(value)
        };

        Ok(Self::new(topology))
    }

    /// Replace the served topology.
    pub fn set_topology(&self, topology: RawTopology) {
        self.state.write().topology = topology;
    }

    /// Make every following fetch fail with `kind`.
    pub fn fail_with(&self, kind: TopologyAdaptorErrorKind) {
        self.state.write().failure = Some(kind);
    }

    /// Stop injecting failures.
    pub fn clear_failure(&self) {
        self.state.write().failure = None;
    }

    /// Delay every following fetch by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        self.state.write().delay = Some(delay);
    }

    /// Number of fetches served so far, failed ones included.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TopologyAdaptor for MockTopologyAdaptor {
    type Error = Error;

    async fn get_topology(&self) -> Result<RawTopology, Self::Error> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let delay = self.state.read().delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let state = self.state.read();
        match state.failure {
            Some(kind) => Err(Error::Injected(kind)),
            None => Ok(state.topology.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sdx_topology::TopologyAdaptorError;

    use super::*;

    #[tokio::test]
    async fn test_mock_topology_adaptor() {
        let adaptor = MockTopologyAdaptor::empty();
        let handle = adaptor.clone();

        let topology = adaptor.get_topology().await.unwrap();
        assert_eq!(topology.as_value(), &json!({"switches": {}, "links": {}}));

        handle.set_topology(RawTopology::new(json!({"switches": {"s1": {"id": "s1"}}})));
        let topology = adaptor.get_topology().await.unwrap();
        assert_eq!(topology.as_value()["switches"]["s1"]["id"], "s1");

        handle.fail_with(TopologyAdaptorErrorKind::Unavailable);
        let err = adaptor.get_topology().await.unwrap_err();
        assert_eq!(err.kind(), TopologyAdaptorErrorKind::Unavailable);

        handle.clear_failure();
        assert!(adaptor.get_topology().await.is_ok());
        assert_eq!(handle.fetch_count(), 4);
    }

    #[tokio::test]
    async fn test_delay() {
        let adaptor = MockTopologyAdaptor::empty();
        adaptor.set_delay(Duration::from_millis(50));

        let started = tokio::time::Instant::now();
        adaptor.get_topology().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_from_file_accepts_api_response() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"topology": {{"switches": {{}}}}}}"#).unwrap();

        let adaptor = MockTopologyAdaptor::from_file(file.path()).unwrap();
        assert_eq!(
            adaptor.state.read().topology.as_value(),
            &json!({"switches": {}})
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            MockTopologyAdaptor::from_file(file.path()),
            Err(Error::TopologyFile(_))
        ));
    }
}
