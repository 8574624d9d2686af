//! Tickets Service Library
//!
//! Listeners the tickets service runs against the event bus. Can be run
//! embedded in the combined binary.

pub mod config;
pub mod events;

use std::sync::Arc;

use ::events::{EventBus, Listener};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::TicketsServiceConfig;
use crate::events::listeners::OrderCreatedListener;

/// Spawn every tickets-service listener on `bus`.
///
/// Each handle finishes only when its subscription closes.
pub fn run_listeners(bus: Arc<dyn EventBus>, config: &TicketsServiceConfig) -> Vec<JoinHandle<()>> {
    let order_created = OrderCreatedListener::new().with_ack_wait(config.ack_wait());

    info!(client_id = %config.event_bus.client_id, "Starting tickets-service listeners");

    vec![tokio::spawn(async move {
        if let Err(e) = order_created.listen(bus.as_ref()).await {
            error!("OrderCreatedListener stopped: {}", e);
        }
    })]
}
