//! Versioned event envelope published to the broker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::format_timestamp;
use crate::error::PublishError;

/// A payload that can be published as an integration event.
///
/// `EVENT_VERSION` changes only through a coordinated schema migration;
/// consumers select their decoder by it.
pub trait IntegrationEvent: Serialize + Send + Sync {
    /// Event kind, e.g. `complaint.created`.
    const EVENT_TYPE: &'static str;

    /// Schema version of the payload.
    const EVENT_VERSION: u32;
}

/// Wire wrapper around an event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEnvelope<P> {
    /// Event kind.
    pub event_type: String,
    /// Payload schema version.
    pub event_version: u32,
    /// When the envelope was built (RFC 3339, UTC).
    pub timestamp: String,
    /// The event payload, embedded verbatim.
    pub payload: P,
}

impl<P: IntegrationEvent> EventEnvelope<P> {
    /// Wrap `payload` in an envelope stamped at `at`.
    #[must_use]
    pub fn wrap(payload: P, at: DateTime<Utc>) -> Self {
        Self {
            event_type: P::EVENT_TYPE.to_owned(),
            event_version: P::EVENT_VERSION,
            timestamp: format_timestamp(at),
            payload,
        }
    }

    /// Encode the envelope as UTF-8 JSON.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Serialization` if the payload fails to encode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PublishError> {
        Ok(serde_json::to_vec(self)?)
    }
}
