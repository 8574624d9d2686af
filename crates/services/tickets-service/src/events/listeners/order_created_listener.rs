use std::time::Duration;

use async_trait::async_trait;
use events::{EventResult, Listener, Message, OrderCreatedData, OrderCreatedEvent, LISTENER_ACK_WAIT};
use tracing::debug;

use super::QUEUE_GROUP_NAME;

/// Receives `order:created`. Tickets take no action on it yet.
#[derive(Debug, Clone)]
pub struct OrderCreatedListener {
    ack_wait: Duration,
}

impl OrderCreatedListener {
    pub fn new() -> Self {
        Self {
            ack_wait: LISTENER_ACK_WAIT,
        }
    }

    pub fn with_ack_wait(mut self, ack_wait: Duration) -> Self {
        self.ack_wait = ack_wait;
        self
    }
}

impl Default for OrderCreatedListener {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Listener for OrderCreatedListener {
    type Event = OrderCreatedEvent;

    fn queue_group_name(&self) -> &str {
        QUEUE_GROUP_NAME
    }

    fn ack_wait(&self) -> Duration {
        self.ack_wait
    }

    async fn on_message(&self, data: OrderCreatedData, msg: &Message) -> EventResult<()> {
        debug!(
            order_id = %data.id,
            ticket_id = %data.ticket.id,
            sequence = msg.sequence(),
            "order created"
        );
        Ok(())
    }
}
