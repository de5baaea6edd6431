//! Topology version counter and its state machine.

use chrono::Utc;
use serde::Serialize;

use crate::notification::{ChangeNotification, NotificationKind};

/// Format of minted timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Version counter and whether conversions are accepted at all.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct VersionState {
    /// Version of the last administrative change. Zero while inactive.
    pub counter: u64,

    /// Whether the controller topology is loaded.
    pub active: bool,
}

/// Version and timestamp proposed for a notification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Classification {
    /// Publish under a new version with a freshly minted timestamp.
    Administrative {
        /// Proposed version, one past the current counter.
        version: u64,
        /// Minted timestamp.
        timestamp: String,
    },

    /// Republish under the current version with the source timestamp.
    Operational {
        /// Current counter.
        version: u64,
        /// Timestamp carried by the notification.
        timestamp: String,
    },

    /// Nothing to publish.
    Ignore,
}

impl Classification {
    /// Proposed version and timestamp, `None` for [`Classification::Ignore`].
    #[must_use]
    pub fn target(&self) -> Option<(u64, &str)> {
        match self {
            Self::Administrative { version, timestamp }
            | Self::Operational { version, timestamp } => Some((*version, timestamp)),
            Self::Ignore => None,
        }
    }
}

/// Owns the [`VersionState`].
///
/// Classification only proposes a version. The counter moves when the
/// proposal is applied, which happens only once the topology built for it has
/// been committed.
#[derive(Debug, Default)]
pub struct VersionController {
    state: VersionState,
}

impl VersionController {
    /// A controller in the uninitialized state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> VersionState {
        self.state
    }

    /// Activate with the counter at 1.
    pub const fn load(&mut self) {
        self.state = VersionState {
            counter: 1,
            active: true,
        };
    }

    /// Deactivate and reset the counter.
    pub const fn unload(&mut self) {
        self.state = VersionState {
            counter: 0,
            active: false,
        };
    }

    /// Decide what `notification` means for the version.
    #[must_use]
    pub fn classify(&self, notification: &ChangeNotification) -> Classification {
        if !self.state.active {
            return Classification::Ignore;
        }

        match (notification.kind, &notification.source_timestamp) {
            (NotificationKind::Administrative, _) => Classification::Administrative {
                version: self.state.counter + 1,
                timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            },
            (NotificationKind::Operational, Some(timestamp)) => Classification::Operational {
                version: self.state.counter,
                timestamp: timestamp.clone(),
            },
            _ => Classification::Ignore,
        }
    }

    /// Apply a classification whose topology was committed.
    pub const fn apply(&mut self, classification: &Classification) {
        if let Classification::Administrative { version, .. } = classification {
            self.state.counter = *version;
        }
    }
}
