//! Event bus abstraction.
//!
//! Publishers put raw payloads on a subject; subscribers receive a
//! [`Subscription`] yielding [`Message`]s. Delivery is at-least-once when
//! manual acknowledgement is enabled, so handlers must tolerate duplicates.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::EventResult;
use crate::message::Message;

/// Default time a delivery may stay unacknowledged, matching the broker default.
pub const DEFAULT_ACK_WAIT: Duration = Duration::from_secs(30);

/// How a subscription wants messages delivered.
#[derive(Debug, Clone)]
pub struct SubscriptionOptions {
    /// Subscribers sharing a queue group split the messages between them.
    /// A named group is durable: it keeps its position while it has no members.
    pub queue_group: Option<String>,
    /// Redelivery timeout for unacknowledged messages
    pub ack_wait: Duration,
    /// Replay the subject's history when the group is first created
    pub deliver_all_available: bool,
    /// When false, messages count as acknowledged as soon as they are delivered
    pub manual_ack: bool,
}

impl Default for SubscriptionOptions {
    fn default() -> Self {
        Self {
            queue_group: None,
            ack_wait: DEFAULT_ACK_WAIT,
            deliver_all_available: false,
            manual_ack: false,
        }
    }
}

impl SubscriptionOptions {
    pub fn queue_group(mut self, name: impl Into<String>) -> Self {
        self.queue_group = Some(name.into());
        self
    }

    pub fn ack_wait(mut self, ack_wait: Duration) -> Self {
        self.ack_wait = ack_wait;
        self
    }

    pub fn deliver_all_available(mut self) -> Self {
        self.deliver_all_available = true;
        self
    }

    pub fn manual_ack(mut self) -> Self {
        self.manual_ack = true;
        self
    }
}

/// Receiving end of a subscription. Dropping it leaves the group.
#[derive(Debug)]
pub struct Subscription {
    subject: String,
    group: String,
    receiver: mpsc::UnboundedReceiver<Message>,
}

impl Subscription {
    pub(crate) fn new(
        subject: impl Into<String>,
        group: impl Into<String>,
        receiver: mpsc::UnboundedReceiver<Message>,
    ) -> Self {
        Self {
            subject: subject.into(),
            group: group.into(),
            receiver,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Queue group this subscription belongs to.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Wait for the next message. `None` once the bus is gone.
    pub async fn next(&mut self) -> Option<Message> {
        self.receiver.recv().await
    }
}

/// Trait for event bus implementations.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish a payload and return its sequence number on the subject.
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> EventResult<u64>;

    /// Subscribe to a subject.
    async fn subscribe(
        &self,
        subject: &str,
        options: SubscriptionOptions,
    ) -> EventResult<Subscription>;
}
