use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::{Error, EvcRequest, Provisioned, Provisioner};

/// Default time allowed for one circuit creation request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration options for the HTTP provisioner.
#[derive(Clone, Debug)]
pub struct HttpProvisionerOptions {
    /// URL of the controller's EVC endpoint
    /// (e.g. `http://localhost:8181/api/kytos/mef_eline/v2/evc/`).
    pub evc_url: String,

    /// Time allowed for one request.
    pub timeout: Duration,
}

impl HttpProvisionerOptions {
    /// Options for `evc_url` with the default timeout.
    #[must_use]
    pub fn new(evc_url: impl Into<String>) -> Self {
        Self {
            evc_url: evc_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Creates circuits through the Kytos `mef_eline` REST API.
#[derive(Clone, Debug)]
pub struct HttpProvisioner {
    client: Client,
    options: HttpProvisionerOptions,
}

impl HttpProvisioner {
    /// Create a new provisioner.
    #[must_use]
    pub fn new(options: HttpProvisionerOptions) -> Self {
        Self {
            client: Client::new(),
            options,
        }
    }
}

#[async_trait]
impl Provisioner for HttpProvisioner {
    type Error = Error;

    async fn create_evc(&self, request: &EvcRequest) -> Result<Provisioned, Self::Error> {
        let url = Url::parse(&self.options.evc_url)
            .map_err(|e| Error::InvalidEndpoint(self.options.evc_url.clone(), e))?;

        let response = self
            .client
            .post(url)
            .json(request)
            .timeout(self.options.timeout)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK && status != StatusCode::CREATED {
            warn!("EVC creation failed on Kytos: {status} {text}");
            return Err(Error::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        info!("EVC {} created ({status})", request.name);
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok(Provisioned {
            status: status.as_u16(),
            body,
        })
    }
}
