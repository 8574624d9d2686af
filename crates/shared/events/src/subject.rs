//! Subjects events are published and subscribed on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventBusError;

/// Named channel an event travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "ticket:created")]
    TicketCreated,
    #[serde(rename = "ticket:updated")]
    TicketUpdated,
    #[serde(rename = "order:created")]
    OrderCreated,
    #[serde(rename = "order:cancelled")]
    OrderCancelled,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::TicketCreated,
        Subject::TicketUpdated,
        Subject::OrderCreated,
        Subject::OrderCancelled,
    ];

    /// Wire name of the subject.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Subject::TicketCreated => "ticket:created",
            Subject::TicketUpdated => "ticket:updated",
            Subject::OrderCreated => "order:created",
            Subject::OrderCancelled => "order:cancelled",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = EventBusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| EventBusError::InvalidSubject(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_subjects() {
        for subject in Subject::ALL {
            assert_eq!(subject.as_str().parse::<Subject>().unwrap(), subject);
        }
    }

    #[test]
    fn test_parse_unknown_subject() {
        assert_eq!(
            "order:shipped".parse::<Subject>(),
            Err(EventBusError::InvalidSubject("order:shipped".to_string()))
        );
    }

    #[test]
    fn test_display_matches_serde_name() {
        let json = serde_json::to_string(&Subject::OrderCreated).unwrap();
        assert_eq!(json, format!("\"{}\"", Subject::OrderCreated));
    }
}
