//! Error taxonomy shared by the intake pipeline.

use std::time::Duration;

use thiserror::Error;

/// Failure to hand an event to the broker.
///
/// Every variant is treated the same way by callers: the request fails as a
/// dependency error. The variants exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The envelope could not be encoded.
    #[error("event serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The broker did not acknowledge the message before the deadline.
    #[error("broker did not acknowledge within {0:?}")]
    Timeout(Duration),

    /// The broker client reported a transport or protocol failure.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// The broker could not be reached for a metadata request.
    #[error("broker unavailable: {0}")]
    Unavailable(String),

    /// The task performing the send did not complete.
    #[error("publish task aborted: {0}")]
    Aborted(String),
}

/// Outcome of a rejected complaint submission.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The request body could not be decoded. Nothing was published.
    #[error("malformed request body: {0}")]
    Client(String),

    /// The broker publish failed. Nothing was published.
    #[error("publish failed: {0}")]
    Dependency(#[from] PublishError),
}
