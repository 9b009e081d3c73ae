//! `rdkafka` implementation of the `BrokerClient` trait.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use rdkafka::ClientConfig;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use tracing::{info, warn};

use complaints_core::broker::{BrokerClient, BrokerHealth, Delivery};
use complaints_core::error::PublishError;

use crate::config::{KafkaConfig, KafkaConfigError};

/// Upper bound on a readiness probe.
const HEALTH_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Kafka producer bound to one topic.
///
/// `FutureProducer` is internally reference counted and safe to use from
/// many tasks at once, so a single instance serves every request.
#[derive(Clone)]
pub struct KafkaBroker {
    producer: FutureProducer,
    topic: String,
    delivery_timeout: Duration,
}

impl KafkaBroker {
    /// Validate `config` and build the producer.
    ///
    /// The connection to the cluster is established lazily by librdkafka; an
    /// unreachable broker shows up on the first send or health probe.
    ///
    /// # Errors
    ///
    /// Returns `KafkaConfigError` if the settings are invalid or librdkafka
    /// rejects them.
    pub fn connect(config: &KafkaConfig) -> Result<Self, KafkaConfigError> {
        config.validate()?;

        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("client.id", &config.client_id)
            .set(
                "message.timeout.ms",
                config.delivery_timeout.as_millis().to_string(),
            )
            .create()?;

        info!(brokers = %config.brokers, topic = %config.topic, "kafka producer created");

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            delivery_timeout: config.delivery_timeout,
        })
    }
}

#[async_trait]
impl BrokerClient for KafkaBroker {
    fn topic(&self) -> &str {
        &self.topic
    }

    async fn send(&self, payload: Vec<u8>) -> Result<Delivery, PublishError> {
        let record: FutureRecord<'_, (), [u8]> =
            FutureRecord::to(&self.topic).payload(payload.as_slice());

        // Never wait on a full local queue; surface it as a failure.
        match self.producer.send(record, Duration::ZERO).await {
            Ok((partition, offset)) => Ok(Delivery { partition, offset }),
            Err((KafkaError::MessageProduction(RDKafkaErrorCode::MessageTimedOut), _)) => {
                Err(PublishError::Timeout(self.delivery_timeout))
            }
            Err((err, _)) => Err(PublishError::Delivery(err.to_string())),
        }
    }

    async fn check_health(&self) -> Result<BrokerHealth, PublishError> {
        let producer = self.producer.clone();
        let topic = self.topic.clone();
        let timeout = self.delivery_timeout.min(HEALTH_PROBE_TIMEOUT);

        // Metadata requests block the calling thread.
        let broker_count = tokio::task::spawn_blocking(move || {
            producer
                .client()
                .fetch_metadata(Some(topic.as_str()), timeout)
                .map(|metadata| metadata.brokers().len())
        })
        .await
        .map_err(|e| PublishError::Aborted(e.to_string()))?
        .map_err(|e| {
            warn!(error = %e, "kafka health probe failed");
            PublishError::Unavailable(e.to_string())
        })?;

        Ok(BrokerHealth {
            broker_count,
            topic: self.topic.clone(),
        })
    }
}

impl fmt::Debug for KafkaBroker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KafkaBroker")
            .field("topic", &self.topic)
            .field("delivery_timeout", &self.delivery_timeout)
            .finish_non_exhaustive()
    }
}
