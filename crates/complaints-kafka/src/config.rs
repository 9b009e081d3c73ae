//! Producer connection settings and their validation.

use std::time::Duration;

use rdkafka::error::KafkaError;
use thiserror::Error;

/// Longest a topic name may be.
const MAX_TOPIC_LEN: usize = 249;

/// Invalid producer configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum KafkaConfigError {
    /// No broker address was given.
    #[error("at least one broker address is required")]
    NoBrokers,

    /// A broker address is not `host:port`.
    #[error("invalid broker address {0:?}: expected host:port")]
    InvalidBroker(String),

    /// The topic name is not one Kafka accepts.
    #[error("invalid topic name {0:?}")]
    InvalidTopic(String),

    /// The delivery timeout must be positive.
    #[error("delivery timeout must be greater than zero")]
    ZeroTimeout,

    /// librdkafka refused the configuration.
    #[error("kafka client error: {0}")]
    Client(#[from] KafkaError),
}

/// Connection parameters for the complaint producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaConfig {
    /// Comma-separated `host:port` bootstrap list.
    pub brokers: String,
    /// Destination topic.
    pub topic: String,
    /// Client id reported to the brokers.
    pub client_id: String,
    /// How long the client may spend delivering one message.
    pub delivery_timeout: Duration,
}

impl KafkaConfig {
    /// Check the settings before a client is built.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with the broker list, topic or
    /// timeout.
    pub fn validate(&self) -> Result<(), KafkaConfigError> {
        if self.brokers.trim().is_empty() {
            return Err(KafkaConfigError::NoBrokers);
        }
        for broker in self.brokers.split(',').map(str::trim) {
            validate_broker(broker)?;
        }

        validate_topic(&self.topic)?;

        if self.delivery_timeout.is_zero() {
            return Err(KafkaConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn validate_broker(address: &str) -> Result<(), KafkaConfigError> {
    let invalid = || KafkaConfigError::InvalidBroker(address.to_owned());
    let (host, port) = address.rsplit_once(':').ok_or_else(invalid)?;
    if host.is_empty() {
        return Err(invalid());
    }
    match port.parse::<u16>() {
        Ok(port) if port > 0 => Ok(()),
        _ => Err(invalid()),
    }
}

fn validate_topic(topic: &str) -> Result<(), KafkaConfigError> {
    let legal_chars = topic
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if topic.is_empty() || topic.len() > MAX_TOPIC_LEN || topic == "." || topic == ".." || !legal_chars
    {
        return Err(KafkaConfigError::InvalidTopic(topic.to_owned()));
    }
    Ok(())
}
