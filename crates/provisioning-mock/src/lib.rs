//! Mock implementation of the provisioner for testing purposes.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use sdx_provisioning::{EvcRequest, Provisioned, Provisioner, ProvisionerErrorKind};
use serde_json::json;

#[derive(Debug, Default)]
struct State {
    failure: Option<ProvisionerErrorKind>,
    requests: Vec<EvcRequest>,
}

/// Mock implementation of the provisioner.
///
/// Answers `201` with a generated circuit id unless a failure is injected, and
/// records every request it receives.
#[derive(Clone, Debug, Default)]
pub struct MockProvisioner {
    state: Arc<RwLock<State>>,
}

impl MockProvisioner {
    /// Create a provisioner accepting every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every following request with `kind`.
    pub fn fail_with(&self, kind: ProvisionerErrorKind) {
        self.state.write().failure = Some(kind);
    }

    /// Requests received so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<EvcRequest> {
        self.state.read().requests.clone()
    }
}

#[async_trait]
impl Provisioner for MockProvisioner {
    type Error = Error;

    async fn create_evc(&self, request: &EvcRequest) -> Result<Provisioned, Self::Error> {
        let mut state = self.state.write();
        state.requests.push(request.clone());

        if let Some(kind) = state.failure {
            return Err(Error::Injected(kind));
        }

        Ok(Provisioned {
            status: 201,
            body: json!({"circuit_id": format!("evc-{}", state.requests.len())}),
        })
    }
}
