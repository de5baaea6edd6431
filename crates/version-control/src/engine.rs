//! The conversion pipeline and the only path that commits a topology.

use std::sync::Arc;

use parking_lot::RwLock;
use sdx_topology::{
    Conversion, ConversionError, TopologyAdaptor, TopologyConverter, TopologySnapshot,
};
use sdx_validation::{ValidationGateway, Verdict};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::config::{EngineConfig, ExchangeConfig};
use crate::error::{EngineError, Result};
use crate::notification::{ChangeNotification, LifecycleSignal};
use crate::store::{CommittedTopology, TopologySnapshotStore};
use crate::version::{Classification, VersionController, VersionState};

/// Publishes the controller topology as versioned, validated SDX topologies.
///
/// Runs that may commit, and lifecycle changes, are serialized on one writer
/// lock held from classification to commit. Reads go to the snapshot store
/// and never wait for a run in flight.
pub struct TopologyEngine<A, V>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
{
    adaptor: A,
    validator: V,
    converter: TopologyConverter,
    config: EngineConfig,
    writer: Mutex<VersionController>,
    version: RwLock<VersionState>,
    store: TopologySnapshotStore,
}

impl<A, V> TopologyEngine<A, V>
where
    A: TopologyAdaptor,
    V: ValidationGateway,
{
    /// Create an engine serving the placeholder topology with version control
    /// inactive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if `exchange` does not resolve to
    /// a single exchange.
    pub fn new(
        adaptor: A,
        validator: V,
        exchange: &ExchangeConfig,
        config: EngineConfig,
    ) -> Result<Self> {
        let metadata = exchange.metadata()?;
        info!(
            "creating topology engine for {} ({}) with model version {}",
            metadata.name, metadata.url, config.model_version
        );

        let converter = TopologyConverter::new(metadata, config.model_version.clone());
        let store = TopologySnapshotStore::new(converter.placeholder());

        Ok(Self {
            adaptor,
            validator,
            converter,
            config,
            writer: Mutex::new(VersionController::new()),
            version: RwLock::new(VersionState::default()),
            store,
        })
    }

    /// Fetch, convert, validate and commit the topology for `notification`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] if the notification is not actionable,
    /// or the failure of whichever step stopped the run. A failed run leaves
    /// the committed topology and the version counter as they were.
    pub async fn run_conversion(
        &self,
        notification: &ChangeNotification,
    ) -> Result<Arc<TopologySnapshot>> {
        let mut controller = self.writer.lock().await;

        let classification = classify(&controller, notification)?;
        let result = self.commit_classified(&mut controller, &classification).await;
        if let Err(e) = &result {
            e.trace(&format!("conversion for {} failed", notification.name));
        }

        result
    }

    /// Build the candidate topology for `notification` without validating or
    /// committing it. The counter does not move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] if the notification is not actionable,
    /// or the fetch or conversion failure.
    pub async fn preview(&self, notification: &ChangeNotification) -> Result<TopologySnapshot> {
        let controller = self.writer.lock().await;

        let classification = classify(&controller, notification)?;
        let result = self
            .candidate(&classification)
            .await
            .map(|conversion| conversion.snapshot);
        if let Err(e) = &result {
            e.trace(&format!("preview for {} failed", notification.name));
        }

        result
    }

    /// Submit an arbitrary document to the validator.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] or
    /// [`EngineError::UpstreamUnavailable`] if the validator could not give a
    /// verdict. Rejections are a verdict, not an error.
    pub async fn validate_only(&self, document: &Value) -> Result<Verdict> {
        let result = self.validate(document).await;
        if let Err(e) = &result {
            e.trace("validation failed");
        }

        result
    }

    /// Apply a lifecycle signal.
    pub async fn signal(&self, signal: LifecycleSignal) {
        let mut controller = self.writer.lock().await;
        match signal {
            LifecycleSignal::Load => controller.load(),
            LifecycleSignal::Unload => controller.unload(),
        }
        *self.version.write() = controller.state();

        info!("version control {signal:?}: {:?}", controller.state());
    }

    /// Activate version control with the counter at 1.
    pub async fn load(&self) {
        self.signal(LifecycleSignal::Load).await;
    }

    /// Deactivate version control.
    pub async fn unload(&self) {
        self.signal(LifecycleSignal::Unload).await;
    }

    /// Current version state.
    #[must_use]
    pub fn version_state(&self) -> VersionState {
        *self.version.read()
    }

    /// The committed topology, or the placeholder before any commit.
    #[must_use]
    pub fn current(&self) -> Arc<TopologySnapshot> {
        self.store.current()
    }

    /// The committed topology together with its mapping.
    #[must_use]
    pub fn committed(&self) -> Arc<CommittedTopology> {
        self.store.committed()
    }

    /// The topology served when nothing can be published.
    #[must_use]
    pub fn placeholder(&self) -> TopologySnapshot {
        self.converter.placeholder()
    }

    /// Controller id published as `exchange_id`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownIdentifier`] if the committed mapping has
    /// no such exchange id.
    pub fn translate_to_controller_id(&self, exchange_id: &str) -> Result<String> {
        self.store.translate_to_controller_id(exchange_id)
    }

    /// Exchange id under which `controller_id` is published.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownIdentifier`] if the committed mapping has
    /// no such controller id.
    pub fn translate_to_exchange_id(&self, controller_id: &str) -> Result<String> {
        self.store.translate_to_exchange_id(controller_id)
    }

    async fn commit_classified(
        &self,
        controller: &mut VersionController,
        classification: &Classification,
    ) -> Result<Arc<TopologySnapshot>> {
        let Conversion { snapshot, mapping } = self.candidate(classification).await?;

        let document = serde_json::to_value(&snapshot)
            .map_err(|e| ConversionError::Malformed(e.to_string()))?;
        if let Verdict::Rejected { status, detail } = self.validate(&document).await? {
            return Err(EngineError::ValidationRejected { status, detail });
        }

        let committed = self.store.commit(snapshot, mapping);
        controller.apply(classification);
        *self.version.write() = controller.state();

        info!(
            "committed topology version {} at {}",
            committed.version, committed.timestamp
        );

        Ok(committed)
    }

    async fn candidate(&self, classification: &Classification) -> Result<Conversion> {
        let (version, timestamp) = classification.target().ok_or(EngineError::NotReady)?;

        let raw = match timeout(self.config.fetch_timeout, self.adaptor.get_topology()).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => return Err(EngineError::from_adaptor(&e)),
            Err(_) => {
                return Err(EngineError::UpstreamUnavailable(format!(
                    "topology fetch timed out after {:?}",
                    self.config.fetch_timeout
                )));
            }
        };

        Ok(self.converter.convert(&raw, version, timestamp)?)
    }

    async fn validate(&self, document: &Value) -> Result<Verdict> {
        match timeout(
            self.config.validation_timeout,
            self.validator.validate(document),
        )
        .await
        {
            Ok(Ok(verdict)) => Ok(verdict),
            Ok(Err(e)) => Err(EngineError::from_validator(&e)),
            Err(_) => Err(EngineError::UpstreamUnavailable(format!(
                "validation timed out after {:?}",
                self.config.validation_timeout
            ))),
        }
    }
}

fn classify(
    controller: &VersionController,
    notification: &ChangeNotification,
) -> Result<Classification> {
    let classification = controller.classify(notification);
    if classification == Classification::Ignore {
        debug!(
            "ignoring {} ({:?}) with version control {:?}",
            notification.name,
            notification.kind,
            controller.state()
        );
        return Err(EngineError::NotReady);
    }

    Ok(classification)
}
