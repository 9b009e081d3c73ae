//! Complaint intake — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use complaints_core::error::IntakeError;
use complaints_kafka::KafkaConfigError;
use serde::Serialize;
use thiserror::Error;

/// Message returned when the broker publish fails. Broker details stay in
/// the server log.
pub const PUBLISH_FAILED_MESSAGE: &str = "Failed to submit complaint";

/// Startup errors for the API server. Any of these stops the process
/// before it starts listening.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The broker connection settings were rejected.
    #[error("broker configuration error: {0}")]
    Broker(#[from] KafkaConfigError),

    /// The tracing pipeline could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `IntakeError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub IntakeError);

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            IntakeError::Client(_) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "client_error",
                    message: self.0.to_string(),
                },
            ),
            IntakeError::Dependency(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "dependency_error",
                    message: PUBLISH_FAILED_MESSAGE.to_owned(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
