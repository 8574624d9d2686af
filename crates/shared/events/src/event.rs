//! Event contracts shared between publishers and listeners.

use chrono::{DateTime, Utc};
use domain::OrderStatus;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{EventBusError, EventResult};
use crate::subject::Subject;

/// Ties a payload type to the subject it travels on.
pub trait Event: Send + Sync + 'static {
    const SUBJECT: Subject;
    type Data: Serialize + DeserializeOwned + Send + Sync + 'static;
}

/// Encode event data as the JSON payload put on the bus.
pub fn encode<E: Event>(data: &E::Data) -> EventResult<Vec<u8>> {
    serde_json::to_vec(data).map_err(|e| EventBusError::Serialization(e.to_string()))
}

/// Decode a bus payload into event data.
pub fn decode<E: Event>(payload: &[u8]) -> EventResult<E::Data> {
    serde_json::from_slice(payload).map_err(|e| EventBusError::Deserialization(e.to_string()))
}

// =============================================================================
// order:created
// =============================================================================

/// Marker for the order-created event.
#[derive(Debug, Clone, Copy)]
pub struct OrderCreatedEvent;

impl Event for OrderCreatedEvent {
    const SUBJECT: Subject = Subject::OrderCreated;
    type Data = OrderCreatedData;
}

/// Payload of `order:created`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedData {
    pub id: String,
    pub version: u64,
    pub status: OrderStatus,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
    pub ticket: TicketSnapshot,
}

/// Ticket fields carried on order events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSnapshot {
    pub id: String,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> OrderCreatedData {
        OrderCreatedData {
            id: "order-1".to_string(),
            version: 0,
            status: OrderStatus::Created,
            user_id: "user-1".to_string(),
            expires_at: Utc.with_ymd_and_hms(2026, 10, 15, 12, 0, 0).unwrap(),
            ticket: TicketSnapshot {
                id: "ticket-1".to_string(),
                price: 20.5,
            },
        }
    }

    #[test]
    fn test_order_created_wire_shape() {
        let payload = encode::<OrderCreatedEvent>(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&payload).unwrap();

        assert_eq!(value["userId"], "user-1");
        assert_eq!(value["status"], "created");
        assert_eq!(value["expiresAt"], "2026-10-15T12:00:00Z");
        assert_eq!(value["ticket"]["price"], 20.5);
    }

    #[test]
    fn test_decode_rejects_foreign_payload() {
        let err = decode::<OrderCreatedEvent>(br#"{"title":"concert"}"#).unwrap_err();
        assert!(matches!(err, EventBusError::Deserialization(_)));
    }
}
