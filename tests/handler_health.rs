mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use finals_dashboard::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["dataset"]["status"], "ok");
    assert_eq!(
        json["checks"]["dataset"]["message"],
        "22 editions, 13 entities"
    );
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_empty_dataset_degraded() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_state_from(vec![], &[], &[]));

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["dataset"]["status"], "error");
}
