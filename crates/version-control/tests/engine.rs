use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use sdx_topology::{RawTopology, TopologyAdaptorErrorKind};
use sdx_topology_mock::MockTopologyAdaptor;
use sdx_validation::ValidationGatewayErrorKind;
use sdx_validation_mock::MockValidationGateway;
use sdx_version_control::{
    ChangeNotification, EngineConfig, EngineError, ExchangeConfig, LifecycleSignal,
    TopologyEngine, VersionState,
};
use serde_json::json;
use tracing_test::traced_test;

type Engine = TopologyEngine<MockTopologyAdaptor, MockValidationGateway>;

const OPERATIONAL_TIMESTAMP: &str = "2024-05-01T10:00:00Z";

fn raw_topology() -> RawTopology {
    RawTopology::new(json!({
        "switches": {
            "aa:00:00:00:00:00:00:01": {
                "id": "aa:00:00:00:00:00:00:01",
                "dpid": "aa:00:00:00:00:00:00:01",
                "name": "Ampath1",
                "enabled": true,
                "active": true,
                "interfaces": {
                    "aa:00:00:00:00:00:00:01:50": {
                        "id": "aa:00:00:00:00:00:00:01:50",
                        "port_number": 50,
                        "enabled": true,
                        "active": true,
                        "speed": 1_250_000_000.0
                    }
                }
            },
            "aa:00:00:00:00:00:00:02": {
                "id": "aa:00:00:00:00:00:00:02",
                "dpid": "aa:00:00:00:00:00:00:02",
                "name": "Ampath2",
                "enabled": true,
                "active": true,
                "interfaces": {
                    "aa:00:00:00:00:00:00:02:50": {
                        "id": "aa:00:00:00:00:00:00:02:50",
                        "port_number": 50,
                        "enabled": true,
                        "active": true,
                        "speed": 1_250_000_000.0
                    }
                }
            }
        },
        "links": {
            "9d2a": {
                "id": "9d2a",
                "enabled": true,
                "active": true,
                "endpoint_a": {"id": "aa:00:00:00:00:00:00:01:50"},
                "endpoint_b": {"id": "aa:00:00:00:00:00:00:02:50"}
            }
        }
    }))
}

fn exchange() -> ExchangeConfig {
    ExchangeConfig {
        index: 0,
        names: vec!["ampath.net".to_string(), "sax.net".to_string()],
        urls: vec!["ampath.net".to_string(), "sax.net".to_string()],
    }
}

fn engine_with(
    adaptor: MockTopologyAdaptor,
    validator: MockValidationGateway,
    config: EngineConfig,
) -> Arc<Engine> {
    Arc::new(TopologyEngine::new(adaptor, validator, &exchange(), config).unwrap())
}

fn engine() -> (Arc<Engine>, MockTopologyAdaptor, MockValidationGateway) {
    let adaptor = MockTopologyAdaptor::new(raw_topology());
    let validator = MockValidationGateway::accepting();
    let engine = engine_with(adaptor.clone(), validator.clone(), EngineConfig::default());

    (engine, adaptor, validator)
}

fn administrative() -> ChangeNotification {
    ChangeNotification::administrative("kytos/topology.switch.enabled")
}

fn operational() -> ChangeNotification {
    ChangeNotification::operational("kytos/topology.link_down", OPERATIONAL_TIMESTAMP)
}

#[tokio::test]
async fn test_starts_with_placeholder() {
    let (engine, adaptor, _) = engine();

    assert_eq!(
        engine.version_state(),
        VersionState {
            counter: 0,
            active: false
        }
    );
    assert_eq!(*engine.current(), engine.placeholder());
    assert_eq!(engine.current().id, "urn:sdx:topology:ampath.net");

    // not loaded yet: nothing is fetched
    assert_eq!(
        engine.run_conversion(&administrative()).await,
        Err(EngineError::NotReady)
    );
    assert_eq!(adaptor.fetch_count(), 0);
}

#[tokio::test]
#[traced_test]
async fn test_administrative_commit() {
    let (engine, _, validator) = engine();
    engine.load().await;
    assert_eq!(engine.version_state().counter, 1);

    let snapshot = engine.run_conversion(&administrative()).await.unwrap();

    assert_eq!(snapshot.version, 2);
    assert_ne!(snapshot.timestamp, OPERATIONAL_TIMESTAMP);
    assert_eq!(engine.current(), snapshot);
    assert_eq!(engine.version_state().counter, 2);
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.links.len(), 1);

    let submitted = validator.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0]["version"], 2);

    assert!(logs_contain("committed topology version 2"));
}

#[tokio::test]
async fn test_operational_keeps_version() {
    let (engine, _, _) = engine();
    engine.load().await;
    for _ in 0..4 {
        engine.run_conversion(&administrative()).await.unwrap();
    }
    assert_eq!(engine.version_state().counter, 5);

    let snapshot = engine.run_conversion(&operational()).await.unwrap();

    assert_eq!(snapshot.version, 5);
    assert_eq!(snapshot.timestamp, OPERATIONAL_TIMESTAMP);
    assert_eq!(engine.version_state().counter, 5);
}

#[tokio::test]
#[traced_test]
async fn test_rejection_leaves_state_untouched() {
    let (engine, _, validator) = engine();
    engine.load().await;
    engine.run_conversion(&administrative()).await.unwrap();
    let before = engine.committed();

    validator.reject(400, json!({"detail": "port without node"}));
    let result = engine.run_conversion(&administrative()).await;

    assert_eq!(
        result,
        Err(EngineError::ValidationRejected {
            status: 400,
            detail: json!({"detail": "port without node"})
        })
    );
    assert_eq!(engine.committed(), before);
    assert_eq!(engine.version_state().counter, 2);
    assert!(logs_contain("validator rejected topology with status 400"));
}

#[tokio::test]
async fn test_failures_leave_state_untouched() {
    let (engine, adaptor, validator) = engine();
    engine.load().await;
    engine.run_conversion(&administrative()).await.unwrap();
    let before = engine.committed();

    adaptor.fail_with(TopologyAdaptorErrorKind::Unavailable);
    assert!(matches!(
        engine.run_conversion(&administrative()).await,
        Err(EngineError::UpstreamUnavailable(_))
    ));

    adaptor.fail_with(TopologyAdaptorErrorKind::Configuration);
    assert!(matches!(
        engine.run_conversion(&operational()).await,
        Err(EngineError::Configuration(_))
    ));

    adaptor.clear_failure();
    adaptor.set_topology(RawTopology::new(json!({
        "switches": {"s1": {"id": "s1", "interfaces": {"s1:1": {"id": "s1:1"}}}}
    })));
    let err = engine.run_conversion(&administrative()).await.unwrap_err();
    assert!(matches!(err, EngineError::Conversion(_)));
    assert_eq!(err.status_code(), 401);

    adaptor.set_topology(raw_topology());
    validator.fail_with(ValidationGatewayErrorKind::Unavailable);
    assert!(matches!(
        engine.run_conversion(&administrative()).await,
        Err(EngineError::UpstreamUnavailable(_))
    ));

    assert_eq!(engine.committed(), before);
    assert_eq!(engine.version_state().counter, 2);
}

#[tokio::test]
async fn test_timeouts_leave_state_untouched() {
    let adaptor = MockTopologyAdaptor::new(raw_topology());
    let validator = MockValidationGateway::accepting();
    let engine = engine_with(
        adaptor.clone(),
        validator.clone(),
        EngineConfig {
            fetch_timeout: Duration::from_millis(50),
            validation_timeout: Duration::from_millis(50),
            ..EngineConfig::default()
        },
    );
    engine.load().await;
    let before = engine.committed();

    adaptor.set_delay(Duration::from_millis(500));
    let err = engine.run_conversion(&administrative()).await.unwrap_err();
    assert!(matches!(err, EngineError::UpstreamUnavailable(_)));
    assert_eq!(err.status_code(), 503);

    adaptor.set_delay(Duration::ZERO);
    validator.set_delay(Duration::from_millis(500));
    assert!(matches!(
        engine.run_conversion(&administrative()).await,
        Err(EngineError::UpstreamUnavailable(_))
    ));

    assert_eq!(engine.committed(), before);
    assert_eq!(engine.version_state().counter, 1);
}

#[tokio::test]
async fn test_unload_refuses_conversions() {
    let (engine, _, _) = engine();
    engine.load().await;
    let committed = engine.run_conversion(&administrative()).await.unwrap();

    engine.signal(LifecycleSignal::Unload).await;
    assert_eq!(
        engine.version_state(),
        VersionState {
            counter: 0,
            active: false
        }
    );

    assert_eq!(
        engine.run_conversion(&administrative()).await,
        Err(EngineError::NotReady)
    );
    assert_eq!(
        engine.run_conversion(&operational()).await,
        Err(EngineError::NotReady)
    );
    assert_eq!(engine.current(), committed);

    // reload restarts the counter
    engine.signal(LifecycleSignal::Load).await;
    let snapshot = engine.run_conversion(&administrative()).await.unwrap();
    assert_eq!(snapshot.version, 2);
}

#[tokio::test]
async fn test_committed_mapping_round_trips() {
    let (engine, _, _) = engine();
    engine.load().await;
    engine.run_conversion(&administrative()).await.unwrap();

    let committed = engine.committed();
    assert_eq!(committed.mapping.len(), 5);
    for (controller_id, exchange_id) in committed.mapping.iter() {
        assert_eq!(
            engine.translate_to_exchange_id(controller_id).unwrap(),
            exchange_id
        );
        assert_eq!(
            engine
                .translate_to_controller_id(&engine.translate_to_exchange_id(controller_id).unwrap())
                .unwrap(),
            controller_id
        );
    }

    assert_eq!(
        engine
            .translate_to_controller_id("urn:sdx:port:ampath.net:Ampath1:50")
            .unwrap(),
        "aa:00:00:00:00:00:00:01:50"
    );
    assert_eq!(
        engine.translate_to_controller_id("urn:sdx:port:ampath.net:Ampath9:1"),
        Err(EngineError::UnknownIdentifier(
            "urn:sdx:port:ampath.net:Ampath9:1".to_string()
        ))
    );
}

#[tokio::test]
async fn test_concurrent_administrative_runs_get_distinct_versions() {
    let (engine, _, validator) = engine();
    validator.set_delay(Duration::from_millis(20));
    engine.load().await;

    let handles: Vec<_> = (0..5)
        .map(|_| {
            let engine = Arc::clone(&engine);
            tokio::spawn(async move { engine.run_conversion(&administrative()).await })
        })
        .collect();

    let mut versions = BTreeSet::new();
    for handle in handles {
        versions.insert(handle.await.unwrap().unwrap().version);
    }

    assert_eq!(versions, (2..=6).collect::<BTreeSet<u64>>());
    assert_eq!(engine.version_state().counter, 6);
    assert_eq!(engine.current().version, 6);
}

#[tokio::test]
async fn test_preview_does_not_commit() {
    let (engine, _, validator) = engine();
    engine.load().await;

    let candidate = engine.preview(&administrative()).await.unwrap();

    assert_eq!(candidate.version, 2);
    assert_eq!(engine.version_state().counter, 1);
    assert_eq!(*engine.current(), engine.placeholder());
    assert!(validator.submitted().is_empty());

    let candidate = engine.preview(&operational()).await.unwrap();
    assert_eq!(candidate.version, 1);
    assert_eq!(candidate.timestamp, OPERATIONAL_TIMESTAMP);
}

#[tokio::test]
async fn test_validate_only_returns_verdict() {
    let (engine, _, validator) = engine();

    let verdict = engine.validate_only(&json!({"id": "x"})).await.unwrap();
    assert!(verdict.is_accepted());

    validator.reject(422, json!({"detail": "missing nodes"}));
    let verdict = engine.validate_only(&json!({"id": "x"})).await.unwrap();
    assert_eq!(verdict.status(), 422);
    assert_eq!(verdict.detail(), &json!({"detail": "missing nodes"}));

    validator.fail_with(ValidationGatewayErrorKind::Configuration);
    assert!(matches!(
        engine.validate_only(&json!({})).await,
        Err(EngineError::Configuration(_))
    ));
}

#[test]
fn test_bad_exchange_config_is_rejected() {
    let config = ExchangeConfig {
        index: 2,
        names: vec!["ampath.net".to_string()],
        urls: vec!["ampath.net".to_string()],
    };

    let result = TopologyEngine::new(
        MockTopologyAdaptor::empty(),
        MockValidationGateway::accepting(),
        &config,
        EngineConfig::default(),
    );
    assert!(matches!(result, Err(EngineError::Configuration(_))));
}
