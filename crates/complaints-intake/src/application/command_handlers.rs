//! Command handlers for the intake context.

use complaints_core::broker::Delivery;
use complaints_core::clock::Clock;
use complaints_core::command::Command;
use complaints_core::error::IntakeError;
use complaints_core::id::IdGenerator;
use tracing::{error, info};
use uuid::Uuid;

use crate::application::publisher::EventPublisher;
use crate::domain::commands::SubmitComplaint;
use crate::domain::complaint::Complaint;

/// What the caller gets back for an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Identifier assigned to the complaint.
    pub complaint_id: Uuid,
    /// Where the broker placed the event.
    pub delivery: Delivery,
}

/// Handles the `SubmitComplaint` command: assigns identity, status and
/// creation time, then publishes exactly once.
///
/// # Errors
///
/// Returns `IntakeError::Dependency` if the publish fails. The cause is
/// logged here.
pub async fn handle_submit_complaint(
    command: SubmitComplaint,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
    publisher: &EventPublisher,
) -> Result<SubmissionReceipt, IntakeError> {
    let correlation_id = command.correlation_id();
    let command_type = command.command_type();
    let complaint = Complaint::open(command, ids.next_id(), clock.now());
    let complaint_id = complaint.id;

    info!(%correlation_id, %complaint_id, command_type, category = %complaint.category, "complaint accepted for publishing");

    let delivery = publisher.publish(complaint).await.inspect_err(|e| {
        error!(%correlation_id, %complaint_id, error = %e, "failed to publish complaint");
    })?;

    Ok(SubmissionReceipt {
        complaint_id,
        delivery,
    })
}
