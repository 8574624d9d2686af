use std::sync::Arc;

use events::{EventBus, OrderCreatedEvent, Publisher};

/// Announces new orders on `order:created`.
#[derive(Clone)]
pub struct OrderCreatedPublisher {
    bus: Arc<dyn EventBus>,
}

impl OrderCreatedPublisher {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self { bus }
    }
}

impl Publisher for OrderCreatedPublisher {
    type Event = OrderCreatedEvent;

    fn bus(&self) -> &dyn EventBus {
        self.bus.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use domain::OrderStatus;
    use events::{InMemoryBus, OrderCreatedData, SubscriptionOptions, TicketSnapshot};

    #[tokio::test]
    async fn test_publishes_on_order_created_subject() {
        let bus = Arc::new(InMemoryBus::new());
        let mut sub = bus
            .subscribe("order:created", SubscriptionOptions::default())
            .await
            .unwrap();
        let publisher = OrderCreatedPublisher::new(bus.clone());

        let data = OrderCreatedData {
            id: "order-42".to_string(),
            version: 0,
            status: OrderStatus::Created,
            user_id: "user-7".to_string(),
            expires_at: Utc::now() + Duration::minutes(15),
            ticket: TicketSnapshot {
                id: "ticket-3".to_string(),
                price: 99.0,
            },
        };
        publisher.publish(&data).await.unwrap();

        let msg = sub.next().await.unwrap();
        let received: OrderCreatedData = serde_json::from_slice(msg.data()).unwrap();
        assert_eq!(received, data);
        assert_eq!(bus.published_count("order:created").await, 1);
    }
}
