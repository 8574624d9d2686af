//! Tickets service configuration.

use std::time::Duration;

use common::{ConfigError, EventBusConfig};

/// Tickets service configuration.
#[derive(Debug, Clone, Default)]
pub struct TicketsServiceConfig {
    pub event_bus: EventBusConfig,
}

impl TicketsServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            event_bus: EventBusConfig::from_env()?,
        })
    }

    /// Redelivery timeout for this service's listeners.
    pub fn ack_wait(&self) -> Duration {
        Duration::from_millis(self.event_bus.ack_wait_ms)
    }
}
