//! Broker client abstraction.
//!
//! A `BrokerClient` is bound to one broker cluster and one destination topic
//! at construction. Implementations must be safe to share across concurrent
//! requests without external locking.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::PublishError;

/// Where the broker placed an acknowledged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    /// Partition chosen by the client's partitioner.
    pub partition: i32,
    /// Offset assigned by the broker.
    pub offset: i64,
}

/// Result of a successful broker reachability probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerHealth {
    /// Number of brokers reported in cluster metadata.
    pub broker_count: usize,
    /// The topic this client publishes to.
    pub topic: String,
}

/// Client handle for publishing to a single, fixed topic.
#[async_trait]
pub trait BrokerClient: Send + Sync {
    /// The destination topic.
    fn topic(&self) -> &str;

    /// Send one unkeyed message and wait until the broker acknowledges it or
    /// the attempt fails. Implementations do not retry.
    async fn send(&self, payload: Vec<u8>) -> Result<Delivery, PublishError>;

    /// Probe the broker for reachability.
    async fn check_health(&self) -> Result<BrokerHealth, PublishError>;
}
