//! Integration tests for the health endpoints.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use complaints_test_support::{FailingBroker, RecordingBroker};

#[tokio::test]
async fn test_health_reports_ok_and_version() {
    let app = common::build_test_app(Arc::new(RecordingBroker::new()));

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_stays_ok_when_broker_is_down() {
    let app = common::build_test_app(Arc::new(FailingBroker));

    let (status, _) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_reports_broker_details() {
    let app = common::build_test_app(Arc::new(RecordingBroker::new()));

    let (status, json) = common::get_json(app, "/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
    assert_eq!(json["brokerCount"], 1);
    assert_eq!(json["topic"], "complaints.created");
}

#[tokio::test]
async fn test_readiness_returns_503_when_broker_is_down() {
    let app = common::build_test_app(Arc::new(FailingBroker));

    let (status, json) = common::get_json(app, "/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "unavailable");
    assert!(!json["message"].as_str().unwrap().contains("refused"));
}
