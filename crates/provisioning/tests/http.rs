use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use sdx_provisioning::{
    EvcEndpoint, EvcRequest, HttpProvisioner, HttpProvisionerOptions, Provisioner,
    ProvisionerError, ProvisionerErrorKind,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/api/kytos/mef_eline/v2/evc/")
}

fn provisioner(url: String, timeout: Duration) -> HttpProvisioner {
    HttpProvisioner::new(HttpProvisionerOptions {
        evc_url: url,
        timeout,
    })
}

fn request() -> EvcRequest {
    EvcRequest {
        name: json!("vlan_100_ampath_sax"),
        uni_a: EvcEndpoint {
            interface_id: "aa:00:00:00:00:00:00:01:50".to_string(),
            tag: Some(json!({"tag_type": 1, "value": 100})),
        },
        uni_z: EvcEndpoint {
            interface_id: "aa:00:00:00:00:00:00:02:50".to_string(),
            tag: None,
        },
        dynamic_backup_path: json!(true),
    }
}

#[tokio::test]
async fn test_creates_evc() {
    let router = Router::new().route(
        "/api/kytos/mef_eline/v2/evc/",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["uni_a"]["interface_id"], "aa:00:00:00:00:00:00:01:50");
            assert_eq!(body["uni_a"]["tag"]["value"], 100);
            assert!(body["uni_z"].get("tag").is_none());
            (StatusCode::CREATED, Json(json!({"circuit_id": "6d2a4b"})))
        }),
    );
    let url = serve(router).await;

    let provisioned = provisioner(url, Duration::from_secs(5))
        .create_evc(&request())
        .await
        .unwrap();

    assert_eq!(provisioned.status, 201);
    assert_eq!(provisioned.body, json!({"circuit_id": "6d2a4b"}));
}

#[tokio::test]
async fn test_unexpected_status_is_rejected() {
    let router = Router::new().route(
        "/api/kytos/mef_eline/v2/evc/",
        post(|| async { (StatusCode::CONFLICT, "circuit already exists") }),
    );
    let url = serve(router).await;

    let err = provisioner(url, Duration::from_secs(5))
        .create_evc(&request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ProvisionerErrorKind::Rejected);
    assert!(err.to_string().contains("circuit already exists"));
}

#[tokio::test]
async fn test_timeout_is_unavailable() {
    let router = Router::new().route(
        "/api/kytos/mef_eline/v2/evc/",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            StatusCode::CREATED
        }),
    );
    let url = serve(router).await;

    let err = provisioner(url, Duration::from_millis(100))
        .create_evc(&request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ProvisionerErrorKind::Unavailable);
    assert!(err.to_string().starts_with("Request to Kytos timeout"));
}

#[tokio::test]
async fn test_bad_endpoint_is_configuration() {
    let err = provisioner("::".to_string(), Duration::from_secs(1))
        .create_evc(&request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ProvisionerErrorKind::Configuration);
}

#[tokio::test]
async fn test_unsupported_scheme_is_configuration() {
    let err = provisioner(
        "ftp://localhost/api/kytos/mef_eline/v2/evc/".to_string(),
        Duration::from_secs(1),
    )
    .create_evc(&request())
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ProvisionerErrorKind::Configuration);
}
