use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::{Error, ValidationGateway, Verdict};

/// Default time allowed for one validation request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration options for the HTTP validation gateway.
#[derive(Clone, Debug)]
pub struct HttpValidationGatewayOptions {
    /// URL the candidate topology is posted to.
    pub validator_url: String,

    /// Time allowed for one request.
    pub timeout: Duration,
}

impl HttpValidationGatewayOptions {
    /// Options for `validator_url` with the default timeout.
    #[must_use]
    pub fn new(validator_url: impl Into<String>) -> Self {
        Self {
            validator_url: validator_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Posts candidate topologies as JSON to a validator service.
#[derive(Clone, Debug)]
pub struct HttpValidationGateway {
    client: Client,
    options: HttpValidationGatewayOptions,
}

impl HttpValidationGateway {
    /// Create a new gateway.
    #[must_use]
    pub fn new(options: HttpValidationGatewayOptions) -> Self {
        Self {
            client: Client::new(),
            options,
        }
    }
}

#[async_trait]
impl ValidationGateway for HttpValidationGateway {
    type Error = Error;

    async fn validate(&self, document: &Value) -> Result<Verdict, Self::Error> {
        let url = Url::parse(&self.options.validator_url)
            .map_err(|e| Error::InvalidEndpoint(self.options.validator_url.clone(), e))?;
        debug!("submitting topology to validator at {url}");

        let response = self
            .client
            .post(url)
            .json(document)
            .timeout(self.options.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        // Validators answering with plain text still get their message through.
        let detail = serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()));

        if status.is_success() {
            Ok(Verdict::Accepted {
                status: status.as_u16(),
                detail,
            })
        } else {
            info!("validator rejected topology with {status}");
            Ok(Verdict::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}
