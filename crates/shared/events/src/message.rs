//! A delivered message and its acknowledgement handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// One delivery of a published payload to a subscriber.
///
/// Redeliveries of the same sequence share the acknowledgement flag, so
/// acknowledging any copy stops further redelivery.
#[derive(Debug, Clone)]
pub struct Message {
    subject: String,
    sequence: u64,
    data: Arc<Vec<u8>>,
    timestamp: DateTime<Utc>,
    redelivered: bool,
    acked: Arc<AtomicBool>,
}

impl Message {
    pub(crate) fn new(
        subject: String,
        sequence: u64,
        data: Arc<Vec<u8>>,
        timestamp: DateTime<Utc>,
        redelivered: bool,
        acked: Arc<AtomicBool>,
    ) -> Self {
        Self {
            subject,
            sequence,
            data,
            timestamp,
            redelivered,
            acked,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Position of the message in its subject's log, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Time the message was published.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Whether an earlier delivery of this message went unacknowledged.
    pub fn is_redelivered(&self) -> bool {
        self.redelivered
    }

    /// Acknowledge the message.
    pub fn ack(&self) {
        self.acked.store(true, Ordering::Release);
    }

    pub fn is_acked(&self) -> bool {
        self.acked.load(Ordering::Acquire)
    }
}
