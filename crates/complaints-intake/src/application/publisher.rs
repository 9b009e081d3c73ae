//! Publishes complaints as versioned events.

use std::fmt;
use std::sync::Arc;

use complaints_core::broker::{BrokerClient, Delivery};
use complaints_core::clock::Clock;
use complaints_core::error::PublishError;
use complaints_core::event::EventEnvelope;
use tracing::{debug, instrument};

use crate::domain::complaint::Complaint;

/// Wraps the shared broker client. Cheap to clone; every clone publishes
/// through the same client handle.
#[derive(Clone)]
pub struct EventPublisher {
    broker: Arc<dyn BrokerClient>,
    clock: Arc<dyn Clock>,
}

impl EventPublisher {
    /// Create a publisher over `broker`, stamping envelopes with `clock`.
    #[must_use]
    pub fn new(broker: Arc<dyn BrokerClient>, clock: Arc<dyn Clock>) -> Self {
        Self { broker, clock }
    }

    /// The topic events are published to.
    #[must_use]
    pub fn topic(&self) -> &str {
        self.broker.topic()
    }

    /// Wrap `complaint` in a `complaint.created` envelope and send it as a
    /// single unkeyed message.
    ///
    /// The send runs on its own task: once started it completes even if the
    /// caller's future is dropped. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns `PublishError` if encoding fails, the broker rejects or times
    /// out the message, or the send task dies.
    #[instrument(skip_all, fields(complaint_id = %complaint.id, topic = %self.broker.topic()))]
    pub async fn publish(&self, complaint: Complaint) -> Result<Delivery, PublishError> {
        let envelope = EventEnvelope::wrap(complaint, self.clock.now());
        let bytes = envelope.to_bytes()?;

        let broker = Arc::clone(&self.broker);
        let delivery = tokio::spawn(async move { broker.send(bytes).await })
            .await
            .map_err(|e| PublishError::Aborted(e.to_string()))??;

        debug!(
            partition = delivery.partition,
            offset = delivery.offset,
            "event acknowledged by broker"
        );
        Ok(delivery)
    }
}

impl fmt::Debug for EventPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventPublisher")
            .field("topic", &self.broker.topic())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use complaints_core::broker::BrokerHealth;
    use complaints_core::event::EventEnvelope;
    use complaints_test_support::{FailingBroker, FixedClock, RecordingBroker};
    use uuid::Uuid;

    use super::*;
    use crate::domain::commands::SubmitComplaint;
    use crate::domain::complaint::ComplaintStatus;

    fn complaint() -> Complaint {
        let command = SubmitComplaint {
            correlation_id: Uuid::new_v4(),
            submitter: "u1".into(),
            description: "broken widget".into(),
            category: "hardware".into(),
        };
        Complaint::open(
            command,
            Uuid::new_v4(),
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )
    }

    fn publisher_over(broker: Arc<dyn BrokerClient>) -> EventPublisher {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 2).unwrap());
        EventPublisher::new(broker, Arc::new(clock))
    }

    struct PanickingBroker;

    #[async_trait]
    impl BrokerClient for PanickingBroker {
        fn topic(&self) -> &str {
            "complaints.created"
        }

        async fn send(&self, _payload: Vec<u8>) -> Result<Delivery, PublishError> {
            panic!("client crashed");
        }

        async fn check_health(&self) -> Result<BrokerHealth, PublishError> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn test_publish_sends_one_enveloped_message() {
        // Arrange
        let broker = Arc::new(RecordingBroker::new());
        let publisher = publisher_over(broker.clone());
        let complaint = complaint();

        // Act
        let delivery = publisher.publish(complaint.clone()).await.unwrap();

        // Assert
        assert_eq!(delivery, Delivery { partition: 0, offset: 0 });
        let sent = broker.sent_messages();
        assert_eq!(sent.len(), 1);

        let envelope: EventEnvelope<Complaint> = serde_json::from_slice(&sent[0]).unwrap();
        assert_eq!(envelope.event_type, "complaint.created");
        assert_eq!(envelope.event_version, 1);
        assert_eq!(envelope.timestamp, "2026-01-15T10:00:02Z");
        assert_eq!(envelope.payload, complaint);
        assert_eq!(envelope.payload.status, ComplaintStatus::Open);
    }

    #[tokio::test]
    async fn test_publish_surfaces_broker_failure() {
        let publisher = publisher_over(Arc::new(FailingBroker));

        let err = publisher.publish(complaint()).await.unwrap_err();

        assert!(matches!(err, PublishError::Delivery(_)));
    }

    #[tokio::test]
    async fn test_publish_reports_crashed_send_as_aborted() {
        let publisher = publisher_over(Arc::new(PanickingBroker));

        let err = publisher.publish(complaint()).await.unwrap_err();

        assert!(matches!(err, PublishError::Aborted(_)));
    }

    #[tokio::test]
    async fn test_publish_completes_when_caller_gives_up() {
        // Arrange
        let broker = Arc::new(RecordingBroker::with_delay(std::time::Duration::from_millis(50)));
        let publisher = publisher_over(broker.clone());

        // Act: drop the publish future long before the broker acknowledges.
        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(5),
            publisher.publish(complaint()),
        )
        .await;
        tokio::time::sleep(std::time::Duration::from_millis(150)).await;

        // Assert
        assert!(abandoned.is_err());
        assert_eq!(broker.sent_messages().len(), 1);
    }

    #[tokio::test]
    async fn test_envelope_timestamp_is_independent_of_created_at() {
        let broker = Arc::new(RecordingBroker::new());
        let later = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap() + Duration::minutes(1);
        let publisher = EventPublisher::new(broker.clone(), Arc::new(FixedClock(later)));

        publisher.publish(complaint()).await.unwrap();

        let json = &broker.sent_json()[0];
        assert_eq!(json["timestamp"], "2026-01-15T10:01:00Z");
        assert_eq!(json["payload"]["createdAt"], "2026-01-15T10:00:00Z");
    }
}
