//! Shared application state.

use std::sync::Arc;

use complaints_core::broker::BrokerClient;
use complaints_core::clock::Clock;
use complaints_core::id::IdGenerator;
use complaints_intake::application::publisher::EventPublisher;

/// Application state shared across all request handlers. Built once at
/// startup; nothing in it is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Source of `createdAt` timestamps.
    pub clock: Arc<dyn Clock>,
    /// Source of complaint identifiers.
    pub ids: Arc<dyn IdGenerator>,
    /// Broker client, used directly for readiness probes.
    pub broker: Arc<dyn BrokerClient>,
    /// Publisher wrapping `broker`.
    pub publisher: EventPublisher,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        broker: Arc<dyn BrokerClient>,
    ) -> Self {
        let publisher = EventPublisher::new(Arc::clone(&broker), Arc::clone(&clock));
        Self {
            clock,
            ids,
            broker,
            publisher,
        }
    }
}
