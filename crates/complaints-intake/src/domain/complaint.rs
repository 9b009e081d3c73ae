//! The canonical complaint record.

use chrono::{DateTime, Utc};
use complaints_core::clock::format_timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::commands::SubmitComplaint;

/// Lifecycle marker. Intake only ever creates open complaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    /// Newly submitted, not yet triaged.
    Open,
}

/// A complaint as published to downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Opaque identity of the submitter.
    pub submitter: String,
    /// Free-text body.
    pub description: String,
    /// Classification tag.
    pub category: String,
    /// Always `OPEN` at creation.
    pub status: ComplaintStatus,
    /// Creation time, RFC 3339 UTC.
    pub created_at: String,
}

impl Complaint {
    /// Build a new open complaint from a submission.
    #[must_use]
    pub fn open(command: SubmitComplaint, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            submitter: command.submitter,
            description: command.description,
            category: command.category,
            status: ComplaintStatus::Open,
            created_at: format_timestamp(created_at),
        }
    }
}
