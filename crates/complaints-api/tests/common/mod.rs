//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use complaints_core::broker::BrokerClient;
use complaints_core::clock::{Clock, MonotonicClock, SystemClock};
use complaints_core::id::{IdGenerator, RandomIdGenerator};
use complaints_test_support::FixedClock;
use http_body_util::BodyExt;
use tower::ServiceExt;

use complaints_api::state::AppState;

/// Fixed timestamp used where a test asserts exact `createdAt` values.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// The clock production uses.
pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(MonotonicClock::new(SystemClock))
}

/// Build the full app over `broker` with production clock and ids.
pub fn build_test_app(broker: Arc<dyn BrokerClient>) -> Router {
    build_test_app_with(broker, system_clock(), Arc::new(RandomIdGenerator))
}

/// Build the full app with every collaborator supplied by the test.
pub fn build_test_app_with(
    broker: Arc<dyn BrokerClient>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
) -> Router {
    complaints_api::app(AppState::new(clock, ids, broker))
}

/// Send a POST request with a raw body and return the response.
pub async fn post_raw(app: Router, uri: &str, body: &[u8]) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_vec()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, &serde_json::to_vec(body).unwrap()).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
