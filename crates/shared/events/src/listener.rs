//! Listener extension point.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::bus::{EventBus, SubscriptionOptions};
use crate::error::EventResult;
use crate::event::{decode, Event};
use crate::message::Message;

/// Default redelivery timeout for listeners.
pub const LISTENER_ACK_WAIT: Duration = Duration::from_secs(5);

/// Consumes one kind of event as a member of a durable queue group.
///
/// `on_message` returning `Ok` acknowledges the message. Returning `Err`
/// leaves it unacknowledged so the bus redelivers it after `ack_wait`.
#[async_trait]
pub trait Listener: Send + Sync {
    type Event: Event;

    /// Queue group, also used as the durable subscription name.
    fn queue_group_name(&self) -> &str;

    fn ack_wait(&self) -> Duration {
        LISTENER_ACK_WAIT
    }

    async fn on_message(
        &self,
        data: <Self::Event as Event>::Data,
        msg: &Message,
    ) -> EventResult<()>;

    fn subscription_options(&self) -> SubscriptionOptions {
        SubscriptionOptions::default()
            .queue_group(self.queue_group_name())
            .ack_wait(self.ack_wait())
            .deliver_all_available()
            .manual_ack()
    }

    /// Subscribe and process messages until the bus goes away.
    async fn listen(&self, bus: &dyn EventBus) -> EventResult<()> {
        let subject = <Self::Event as Event>::SUBJECT;
        let mut subscription = bus
            .subscribe(subject.as_str(), self.subscription_options())
            .await?;
        info!(
            subject = %subject,
            group = self.queue_group_name(),
            "Listening"
        );

        while let Some(msg) = subscription.next().await {
            self.dispatch(&msg).await;
        }

        Ok(())
    }

    /// Decode one message and hand it to `on_message`.
    async fn dispatch(&self, msg: &Message) {
        info!(
            subject = msg.subject(),
            group = self.queue_group_name(),
            sequence = msg.sequence(),
            redelivered = msg.is_redelivered(),
            "Message received"
        );

        let data = match decode::<Self::Event>(msg.data()) {
            Ok(data) => data,
            Err(e) => {
                // Redelivery cannot fix a bad payload.
                error!(subject = msg.subject(), sequence = msg.sequence(), error = %e, "Discarding message");
                msg.ack();
                return;
            }
        };

        match self.on_message(data, msg).await {
            Ok(()) => msg.ack(),
            Err(e) => warn!(
                subject = msg.subject(),
                sequence = msg.sequence(),
                error = %e,
                "Listener failed, message left for redelivery"
            ),
        }
    }
}
