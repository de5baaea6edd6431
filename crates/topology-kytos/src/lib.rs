//! Kytos REST implementation of the topology adaptor interface.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sdx_topology::{RawTopology, TopologyAdaptor};
use tracing::{debug, warn};
use url::Url;

/// Default time allowed for one topology request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration options for the Kytos topology adaptor.
#[derive(Clone, Debug)]
pub struct KytosTopologyAdaptorOptions {
    /// URL of the controller's topology endpoint
    /// (e.g. `http://localhost:8181/api/kytos/topology/v3/`).
    pub topology_url: String,

    /// Time allowed for one request.
    pub timeout: Duration,
}

impl KytosTopologyAdaptorOptions {
    /// Options for `topology_url` with the default timeout.
    #[must_use]
    pub fn new(topology_url: impl Into<String>) -> Self {
        Self {
            topology_url: topology_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Fetches the raw topology from a Kytos controller over HTTP.
///
/// The endpoint is only parsed when a request is made, so a misconfigured URL
/// fails the request rather than startup.
#[derive(Clone, Debug)]
pub struct KytosTopologyAdaptor {
    client: Client,
    options: KytosTopologyAdaptorOptions,
}

impl KytosTopologyAdaptor {
    /// Create a new adaptor.
    #[must_use]
    pub fn new(options: KytosTopologyAdaptorOptions) -> Self {
        Self {
            client: Client::new(),
            options,
        }
    }

    fn endpoint(&self) -> Result<Url, Error> {
        Url::parse(&self.options.topology_url)
            .map_err(|e| Error::InvalidEndpoint(self.options.topology_url.clone(), e))
    }
}

#[async_trait]
impl TopologyAdaptor for KytosTopologyAdaptor {
    type Error = Error;

    async fn get_topology(&self) -> Result<RawTopology, Self::Error> {
        let url = self.endpoint()?;
        debug!("fetching raw topology from {url}");

        let response = self
            .client
            .get(url)
            .timeout(self.options.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("controller answered topology request with {status}");
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;

        RawTopology::from_response(value).ok_or(Error::MissingTopology)
    }
}
