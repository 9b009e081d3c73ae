//! Process configuration read from the environment at startup.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use complaints_kafka::KafkaConfig;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TOPIC: &str = "complaints.created";
const DEFAULT_CLIENT_ID: &str = "complaint-intake";
const DEFAULT_DELIVERY_TIMEOUT_MS: u64 = 5_000;

/// Everything the server needs before it can accept requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Address to bind the listener to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Broker connection.
    pub kafka: KafkaConfig,
    /// OTLP/gRPC collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` or `AppError::Broker` if a value is missing
    /// or invalid.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` or `AppError::Broker` if a value is missing
    /// or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_owned())
            .parse::<IpAddr>()
            .map_err(|e| AppError::Config(format!("HOST must be an IP address: {e}")))?;
        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let brokers = var("KAFKA_BROKERS").ok_or_else(|| {
            AppError::Config("KAFKA_BROKERS environment variable must be set".into())
        })?;
        let delivery_timeout_ms = match var("KAFKA_DELIVERY_TIMEOUT_MS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("KAFKA_DELIVERY_TIMEOUT_MS must be milliseconds: {e}"))
            })?,
            None => DEFAULT_DELIVERY_TIMEOUT_MS,
        };
        let kafka = KafkaConfig {
            brokers,
            topic: var("KAFKA_TOPIC").unwrap_or_else(|| DEFAULT_TOPIC.to_owned()),
            client_id: var("KAFKA_CLIENT_ID").unwrap_or_else(|| DEFAULT_CLIENT_ID.to_owned()),
            delivery_timeout: Duration::from_millis(delivery_timeout_ms),
        };
        kafka.validate()?;

        Ok(Self {
            host,
            port,
            kafka,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }

    /// The socket address to listen on.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
