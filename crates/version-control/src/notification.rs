//! Topology change notifications, built once at the event boundary.

use serde_json::Value;

/// Events that bump the topology version.
pub const ADMINISTRATIVE_EVENTS: [&str; 4] = [
    "kytos/topology.switch.enabled",
    "kytos/topology.switch.disabled",
    "version/control.initialize",
    "version/control.get",
];

/// Events that republish the topology under the current version.
pub const OPERATIONAL_EVENTS: [&str; 6] = [
    "kytos/topology.link_up",
    "kytos/topology.link_down",
    "kytos/topology.switch.interface.link_up",
    "kytos/topology.switch.interface.link_down",
    "kytos/topology.switch.interface.created",
    "kytos/topology.switch.interface.deleted",
];

/// Host signal announcing the controller topology is available.
pub const TOPOLOGY_LOADED_EVENT: &str = "kytos/topology.topology_loaded";

/// Host signal announcing the controller topology went away.
pub const TOPOLOGY_UNLOADED_EVENT: &str = "kytos/topology.unloaded";

/// What a notification means for the topology version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    /// Configuration change, bumps the version.
    Administrative,

    /// State change, keeps the version.
    Operational,

    /// Nothing to publish.
    Ignored,
}

impl NotificationKind {
    /// Kind of a controller event by name.
    #[must_use]
    pub fn from_event_name(name: &str) -> Self {
        if ADMINISTRATIVE_EVENTS.contains(&name) {
            Self::Administrative
        } else if OPERATIONAL_EVENTS.contains(&name) {
            Self::Operational
        } else {
            Self::Ignored
        }
    }

    /// Kind named by a REST path segment (`administrative` / `operational`).
    #[must_use]
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            "administrative" => Self::Administrative,
            "operational" => Self::Operational,
            _ => Self::Ignored,
        }
    }
}

/// A topology change notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeNotification {
    /// Event name, kept for logging.
    pub name: String,

    /// What the event means for the version.
    pub kind: NotificationKind,

    /// Time the controller observed the change.
    pub source_timestamp: Option<String>,

    /// Device or port identifiers carried by the event.
    pub payload: Option<Value>,
}

impl ChangeNotification {
    /// Build a notification from a controller event.
    #[must_use]
    pub fn from_event(
        name: impl Into<String>,
        source_timestamp: Option<String>,
        payload: Option<Value>,
    ) -> Self {
        let name = name.into();
        Self {
            kind: NotificationKind::from_event_name(&name),
            name,
            source_timestamp,
            payload,
        }
    }

    /// Build a notification from a REST `event_type`/`event_timestamp` pair.
    #[must_use]
    pub fn from_event_type(event_type: &str, event_timestamp: impl Into<String>) -> Self {
        Self {
            name: format!("rest/{event_type}"),
            kind: NotificationKind::from_event_type(event_type),
            source_timestamp: Some(event_timestamp.into()),
            payload: None,
        }
    }

    /// An administrative notification with no payload.
    #[must_use]
    pub fn administrative(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NotificationKind::Administrative,
            source_timestamp: None,
            payload: None,
        }
    }

    /// An operational notification observed at `source_timestamp`.
    #[must_use]
    pub fn operational(name: impl Into<String>, source_timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NotificationKind::Operational,
            source_timestamp: Some(source_timestamp.into()),
            payload: None,
        }
    }
}

/// Lifecycle signals from the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleSignal {
    /// The controller topology became available.
    Load,

    /// The controller topology went away.
    Unload,
}

impl LifecycleSignal {
    /// The signal carried by a host event, if any.
    #[must_use]
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            TOPOLOGY_LOADED_EVENT => Some(Self::Load),
            TOPOLOGY_UNLOADED_EVENT => Some(Self::Unload),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(
            NotificationKind::from_event_name("kytos/topology.switch.enabled"),
            NotificationKind::Administrative
        );
        assert_eq!(
            NotificationKind::from_event_name("kytos/topology.link_down"),
            NotificationKind::Operational
        );
        assert_eq!(
            NotificationKind::from_event_name("kytos/topology.switch.new"),
            NotificationKind::Ignored
        );
    }

    #[test]
    fn test_from_event_keeps_payload() {
        let notification = ChangeNotification::from_event(
            "kytos/topology.switch.disabled",
            None,
            Some(json!({"dpid": "aa:00:00:00:00:00:00:01"})),
        );

        assert_eq!(notification.kind, NotificationKind::Administrative);
        assert_eq!(
            notification.payload,
            Some(json!({"dpid": "aa:00:00:00:00:00:00:01"}))
        );
    }

    #[test]
    fn test_event_types() {
        let notification = ChangeNotification::from_event_type("operational", "2024-05-01T10:00:00Z");
        assert_eq!(notification.kind, NotificationKind::Operational);
        assert_eq!(
            notification.source_timestamp.as_deref(),
            Some("2024-05-01T10:00:00Z")
        );

        let notification = ChangeNotification::from_event_type("maintenance", "now");
        assert_eq!(notification.kind, NotificationKind::Ignored);
    }

    #[test]
    fn test_lifecycle_signals() {
        assert_eq!(
            LifecycleSignal::from_event_name("kytos/topology.topology_loaded"),
            Some(LifecycleSignal::Load)
        );
        assert_eq!(
            LifecycleSignal::from_event_name("kytos/topology.unloaded"),
            Some(LifecycleSignal::Unload)
        );
        assert_eq!(
            LifecycleSignal::from_event_name("version/control.get"),
            None
        );
    }
}
