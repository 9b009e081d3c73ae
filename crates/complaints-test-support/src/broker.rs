//! Test brokers — mock `BrokerClient` implementations for tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use complaints_core::broker::{BrokerClient, BrokerHealth, Delivery};
use complaints_core::error::PublishError;

const TEST_TOPIC: &str = "complaints.created";

/// A broker that records every message it is asked to send and always
/// acknowledges. Messages land on partition 0 with consecutive offsets.
#[derive(Debug, Default)]
pub struct RecordingBroker {
    sent: Mutex<Vec<Vec<u8>>>,
    delay: Option<Duration>,
}

impl RecordingBroker {
    /// Create a recording broker that acknowledges immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording broker that waits `delay` before acknowledging,
    /// so concurrent sends overlap.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            delay: Some(delay),
        }
    }

    /// Returns a snapshot of the raw message values that were sent.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn sent_messages(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }

    /// Returns every sent message decoded as JSON.
    ///
    /// # Panics
    ///
    /// Panics if a message is not valid JSON.
    pub fn sent_json(&self) -> Vec<serde_json::Value> {
        self.sent_messages()
            .iter()
            .map(|bytes| serde_json::from_slice(bytes).expect("sent message is not JSON"))
            .collect()
    }
}

#[async_trait]
impl BrokerClient for RecordingBroker {
    fn topic(&self) -> &str {
        TEST_TOPIC
    }

    async fn send(&self, payload: Vec<u8>) -> Result<Delivery, PublishError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(payload);
        Ok(Delivery {
            partition: 0,
            offset: i64::try_from(sent.len() - 1).unwrap(),
        })
    }

    async fn check_health(&self) -> Result<BrokerHealth, PublishError> {
        Ok(BrokerHealth {
            broker_count: 1,
            topic: TEST_TOPIC.to_owned(),
        })
    }
}

/// A broker that is never reachable. Useful for testing error-handling
/// paths.
#[derive(Debug)]
pub struct FailingBroker;

#[async_trait]
impl BrokerClient for FailingBroker {
    fn topic(&self) -> &str {
        TEST_TOPIC
    }

    async fn send(&self, _payload: Vec<u8>) -> Result<Delivery, PublishError> {
        Err(PublishError::Delivery("connection refused".into()))
    }

    async fn check_health(&self) -> Result<BrokerHealth, PublishError> {
        Err(PublishError::Unavailable("connection refused".into()))
    }
}
