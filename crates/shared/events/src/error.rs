//! Event bus errors.

use thiserror::Error;

/// Errors that can occur while publishing, subscribing or handling events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventBusError {
    /// Subject string does not name a known subject
    #[error("Invalid subject: {0}")]
    InvalidSubject(String),

    /// Failed to publish to a subject
    #[error("Publish failed for subject '{subject}': {reason}")]
    PublishFailed { subject: String, reason: String },

    /// Failed to subscribe to a subject
    #[error("Subscription failed for subject '{subject}': {reason}")]
    SubscriptionFailed { subject: String, reason: String },

    /// Event data could not be encoded
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Message payload could not be decoded into the event data
    #[error("Deserialization failed: {0}")]
    Deserialization(String),

    /// A listener rejected the message
    #[error("Listener failed: {0}")]
    Handler(String),
}

impl EventBusError {
    pub fn handler(reason: impl Into<String>) -> Self {
        EventBusError::Handler(reason.into())
    }
}

/// Result type alias for event operations
pub type EventResult<T> = Result<T, EventBusError>;
