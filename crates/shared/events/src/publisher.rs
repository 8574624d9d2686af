//! Publisher extension point.

use async_trait::async_trait;
use tracing::info;

use crate::bus::EventBus;
use crate::error::EventResult;
use crate::event::{encode, Event};

/// Publishes one kind of event. Implementors only name the event and
/// provide the bus.
///
/// ```rust,ignore
/// pub struct OrderCreatedPublisher { bus: Arc<dyn EventBus> }
///
/// impl Publisher for OrderCreatedPublisher {
///     type Event = OrderCreatedEvent;
///
///     fn bus(&self) -> &dyn EventBus {
///         self.bus.as_ref()
///     }
/// }
/// ```
#[async_trait]
pub trait Publisher: Send + Sync {
    type Event: Event;

    fn bus(&self) -> &dyn EventBus;

    /// Serialize `data` and publish it on the event's subject.
    async fn publish(&self, data: &<Self::Event as Event>::Data) -> EventResult<u64> {
        let subject = <Self::Event as Event>::SUBJECT;
        let payload = encode::<Self::Event>(data)?;
        let sequence = self.bus().publish(subject.as_str(), payload).await?;

        info!(subject = %subject, sequence, "Event published");
        Ok(sequence)
    }
}
