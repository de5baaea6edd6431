//! Exchange identity and engine tuning.

use std::time::Duration;

use sdx_topology::ExchangeMetadata;

use crate::error::{EngineError, Result};

/// Default data model version stamped on published topologies.
pub const DEFAULT_MODEL_VERSION: &str = "2.0.0";

/// Default bound on a raw topology fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default bound on a validation request.
pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(10);

/// The exchange this service publishes for, picked out of the federation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExchangeConfig {
    /// Position of this exchange in the federation lists.
    pub index: usize,

    /// Names of every exchange in the federation.
    pub names: Vec<String>,

    /// URLs of every exchange in the federation.
    pub urls: Vec<String>,
}

impl ExchangeConfig {
    /// Resolve this exchange's identity.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Configuration`] if the lists differ in length or
    /// the index is outside them.
    pub fn metadata(&self) -> Result<ExchangeMetadata> {
        if self.names.len() != self.urls.len() {
            return Err(EngineError::Configuration(format!(
                "{} exchange names but {} exchange urls",
                self.names.len(),
                self.urls.len()
            )));
        }

        let (Some(name), Some(url)) = (self.names.get(self.index), self.urls.get(self.index))
        else {
            return Err(EngineError::Configuration(format!(
                "exchange index {} outside the {} configured exchanges",
                self.index,
                self.names.len()
            )));
        };

        Ok(ExchangeMetadata {
            name: name.clone(),
            url: url.clone(),
            names: self.names.clone(),
            urls: self.urls.clone(),
        })
    }
}

/// Engine tuning.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Data model version stamped on published topologies.
    pub model_version: String,

    /// Bound on a raw topology fetch.
    pub fetch_timeout: Duration,

    /// Bound on a validation request.
    pub validation_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_version: DEFAULT_MODEL_VERSION.to_string(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            validation_timeout: DEFAULT_VALIDATION_TIMEOUT,
        }
    }
}
