//! Complaint submission endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use complaints_intake::application::command_handlers;
use complaints_intake::domain::commands::SubmitComplaint;

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation text returned for an accepted submission.
pub const ACCEPTED_MESSAGE: &str = "Complaint submitted successfully";

/// Response body for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    /// Confirmation text.
    pub message: &'static str,
    /// Identifier assigned to the complaint, for client correlation.
    pub id: Uuid,
}

/// POST /complaints
///
/// The body is decoded here rather than by the `Json` extractor so that
/// every decode failure is a 400 carrying the decoder's message, whatever
/// the content type.
#[instrument(skip_all, fields(correlation_id))]
async fn submit_complaint(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmissionAccepted>), ApiError> {
    let correlation_id = Uuid::new_v4();
    tracing::Span::current().record("correlation_id", tracing::field::display(correlation_id));

    let command = SubmitComplaint::decode(&body, correlation_id).inspect_err(|e| {
        warn!(error = %e, "rejected complaint submission");
    })?;

    info!("handling submit_complaint command");

    let receipt = command_handlers::handle_submit_complaint(
        command,
        state.clock.as_ref(),
        state.ids.as_ref(),
        &state.publisher,
    )
    .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmissionAccepted {
            message: ACCEPTED_MESSAGE,
            id: receipt.complaint_id,
        }),
    ))
}

/// Returns the router for complaint submission.
pub fn router() -> Router<AppState> {
    Router::new().route("/complaints", post(submit_complaint))
}
