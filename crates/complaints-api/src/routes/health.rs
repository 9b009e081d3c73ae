//! Health check endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

/// Liveness response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Readiness response when the broker answered.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    /// Always `ready`.
    pub status: &'static str,
    /// Brokers reported by the cluster.
    pub broker_count: usize,
    /// Topic complaints are published to.
    pub topic: String,
}

/// Readiness response when the broker could not be reached.
#[derive(Serialize)]
pub struct UnavailableResponse {
    /// Always `unavailable`.
    pub status: &'static str,
    /// Short explanation.
    pub message: &'static str,
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /health/ready
async fn readiness(State(state): State<AppState>) -> Response {
    match state.broker.check_health().await {
        Ok(health) => Json(ReadyResponse {
            status: "ready",
            broker_count: health.broker_count,
            topic: health.topic,
        })
        .into_response(),
        Err(e) => {
            warn!(error = %e, topic = %state.broker.topic(), "broker readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnavailableResponse {
                    status: "unavailable",
                    message: "message broker unreachable",
                }),
            )
                .into_response()
        }
    }
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness))
}
