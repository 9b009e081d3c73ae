//! Kafka adapter for the complaint intake service.

pub mod config;
pub mod kafka_broker;

pub use config::{KafkaConfig, KafkaConfigError};
pub use kafka_broker::KafkaBroker;
