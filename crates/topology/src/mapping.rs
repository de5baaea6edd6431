//! Bidirectional translation between controller ids and SDX URNs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Controller id ↔ exchange id tables for exactly one topology snapshot.
///
/// Both directions are written together, so every entry has its mirror.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierMapping {
    to_exchange: BTreeMap<String, String>,
    to_controller: BTreeMap<String, String>,
}

impl IdentifierMapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `controller_id` is published as `exchange_id`.
    ///
    /// Re-inserting an identical pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DuplicateIdentifier`] if either id is already
    /// paired with a different counterpart.
    pub fn insert(
        &mut self,
        controller_id: impl Into<String>,
        exchange_id: impl Into<String>,
    ) -> Result<(), ConversionError> {
        let controller_id = controller_id.into();
        let exchange_id = exchange_id.into();

        if let Some(existing) = self.to_exchange.get(&controller_id) {
            if *existing == exchange_id {
                return Ok(());
            }
            return Err(ConversionError::DuplicateIdentifier(controller_id));
        }
        if self.to_controller.contains_key(&exchange_id) {
            return Err(ConversionError::DuplicateIdentifier(exchange_id));
        }

        self.to_controller
            .insert(exchange_id.clone(), controller_id.clone());
        self.to_exchange.insert(controller_id, exchange_id);

        Ok(())
    }

    /// Translate a controller id to its exchange URN.
    #[must_use]
    pub fn to_exchange_id(&self, controller_id: &str) -> Option<&str> {
        self.to_exchange.get(controller_id).map(String::as_str)
    }

    /// Translate an exchange URN to the controller id.
    #[must_use]
    pub fn to_controller_id(&self, exchange_id: &str) -> Option<&str> {
        self.to_controller.get(exchange_id).map(String::as_str)
    }

    /// Iterate over `(controller id, exchange id)` pairs in controller id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.to_exchange
            .iter()
            .map(|(c, e)| (c.as_str(), e.as_str()))
    }

    /// Number of mapped identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_exchange.len()
    }

    /// Whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_exchange.is_empty()
    }
}
