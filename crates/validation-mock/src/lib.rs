//! Mock implementation of the validation gateway for testing purposes.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;

pub use error::Error;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use sdx_validation::{ValidationGateway, ValidationGatewayErrorKind, Verdict};
use serde_json::{Value, json};

#[derive(Clone, Debug)]
enum Behaviour {
    Accept,
    Reject { status: u16, detail: Value },
    Fail(ValidationGatewayErrorKind),
}

#[derive(Debug)]
struct State {
    behaviour: Behaviour,
    delay: Option<Duration>,
    submitted: Vec<Value>,
}

/// Mock implementation of the validation gateway.
///
/// Clones share state. Every submitted document is recorded, including those
/// that end in an injected failure.
#[derive(Clone, Debug)]
pub struct MockValidationGateway {
    state: Arc<RwLock<State>>,
}

impl MockValidationGateway {
    /// Create a gateway accepting every document.
    #[must_use]
    pub fn accepting() -> Self {
        Self::with_behaviour(Behaviour::Accept)
    }

    /// Create a gateway rejecting every document with `status` and `detail`.
    #[must_use]
    pub fn rejecting(status: u16, detail: Value) -> Self {
        Self::with_behaviour(Behaviour::Reject { status, detail })
    }

    /// Create a gateway failing every request with `kind`.
    #[must_use]
    pub fn failing(kind: ValidationGatewayErrorKind) -> Self {
        Self::with_behaviour(Behaviour::Fail(kind))
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                behaviour,
                delay: None,
                submitted: Vec::new(),
            })),
        }
    }

    /// Accept every following document.
    pub fn accept(&self) {
        self.state.write().behaviour = Behaviour::Accept;
    }

    /// Reject every following document with `status` and `detail`.
    pub fn reject(&self, status: u16, detail: Value) {
        self.state.write().behaviour = Behaviour::Reject { status, detail };
    }

    /// Fail every following request with `kind`.
    pub fn fail_with(&self, kind: ValidationGatewayErrorKind) {
        self.state.write().behaviour = Behaviour::Fail(kind);
    }

    /// Delay every following answer by `delay`.
    pub fn set_delay(&self, delay: Duration) {
        self.state.write().delay = Some(delay);
    }

    /// Documents submitted so far, in order.
    #[must_use]
    pub fn submitted(&self) -> Vec<Value> {
        self.state.read().submitted.clone()
    }
}

#[async_trait]
impl ValidationGateway for MockValidationGateway {
    type Error = Error;

    async fn validate(&self, document: &Value) -> Result<Verdict, Self::Error> {
        let delay = {
            let mut state = self.state.write();
            state.submitted.push(document.clone());
            state.delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let behaviour = self.state.read().behaviour.clone();
        match behaviour {
            Behaviour::Accept => Ok(Verdict::Accepted {
                status: 200,
                detail: json!({"result": "valid"}),
            }),
            Behaviour::Reject { status, detail } => Ok(Verdict::Rejected { status, detail }),
            Behaviour::Fail(kind) => Err(Error::Injected(kind)),
        }
    }
}
