//! Order lifecycle status shared between services.

use serde::{Deserialize, Serialize};

/// Status of an order as carried on order events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order created, ticket not yet reserved
    #[serde(rename = "created")]
    Created,
    /// Ticket already reserved elsewhere, user cancelled, or order expired
    #[serde(rename = "cancelled")]
    Cancelled,
    /// Ticket reserved, waiting for payment
    #[serde(rename = "awaiting:payment")]
    AwaitingPayment,
    /// Payment received
    #[serde(rename = "complete")]
    Complete,
}

impl OrderStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::AwaitingPayment => "awaiting:payment",
            OrderStatus::Complete => "complete",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        for status in [
            OrderStatus::Created,
            OrderStatus::Cancelled,
            OrderStatus::AwaitingPayment,
            OrderStatus::Complete,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }

    #[test]
    fn test_awaiting_payment_keeps_colon() {
        let status: OrderStatus = serde_json::from_str("\"awaiting:payment\"").unwrap();
        assert_eq!(status, OrderStatus::AwaitingPayment);
    }
}
