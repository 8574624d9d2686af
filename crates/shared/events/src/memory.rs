//! In-process event bus.
//!
//! Keeps a per-subject log and fans each published message out to every
//! queue group on the subject. Within a group, members take turns. With
//! manual acknowledgement a delivery that is not acked within the group's
//! `ack_wait` goes out again, to the next member in turn.
//!
//! Each subject keeps at most `max_msgs` messages. Older ones are dropped
//! from the front, so a `deliver_all_available` replay starts at the oldest
//! retained sequence.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, trace};

use crate::bus::{EventBus, Subscription, SubscriptionOptions};
use crate::error::{EventBusError, EventResult};
use crate::message::Message;

#[derive(Debug, Clone)]
struct StoredMessage {
    sequence: u64,
    data: Arc<Vec<u8>>,
    timestamp: DateTime<Utc>,
}

/// A stored message on its way to one group.
#[derive(Debug, Clone)]
struct Delivery {
    stored: StoredMessage,
    acked: Arc<AtomicBool>,
    redelivered: bool,
}

impl Delivery {
    fn new(stored: StoredMessage) -> Self {
        Self {
            stored,
            acked: Arc::new(AtomicBool::new(false)),
            redelivered: false,
        }
    }

    fn to_message(&self, subject: &str) -> Message {
        Message::new(
            subject.to_string(),
            self.stored.sequence,
            Arc::clone(&self.stored.data),
            self.stored.timestamp,
            self.redelivered,
            Arc::clone(&self.acked),
        )
    }
}

#[derive(Debug)]
struct Group {
    members: Vec<mpsc::UnboundedSender<Message>>,
    cursor: usize,
    pending: VecDeque<Delivery>,
    options: SubscriptionOptions,
}

impl Group {
    fn new(member: mpsc::UnboundedSender<Message>, options: SubscriptionOptions) -> Self {
        Self {
            members: vec![member],
            cursor: 0,
            pending: VecDeque::new(),
            options,
        }
    }

    fn is_durable(&self) -> bool {
        self.options.queue_group.is_some()
    }

    /// Hand the message to the next live member, pruning closed ones.
    fn send_round_robin(&mut self, message: Message) -> bool {
        while !self.members.is_empty() {
            let idx = self.cursor % self.members.len();
            if self.members[idx].send(message.clone()).is_ok() {
                self.cursor = idx + 1;
                return true;
            }
            self.members.remove(idx);
            self.cursor = idx;
        }
        false
    }
}

/// Per-subject message limit, matching the broker default.
pub const DEFAULT_MAX_MSGS: usize = 1_000_000;

#[derive(Debug, Default)]
struct Channel {
    log: VecDeque<StoredMessage>,
    last_sequence: u64,
    groups: HashMap<String, Group>,
}

impl Channel {
    fn append(&mut self, data: Vec<u8>, max_msgs: usize) -> StoredMessage {
        self.last_sequence += 1;
        let stored = StoredMessage {
            sequence: self.last_sequence,
            data: Arc::new(data),
            timestamp: Utc::now(),
        };
        self.log.push_back(stored.clone());
        while self.log.len() > max_msgs {
            self.log.pop_front();
        }
        stored
    }

    /// Drop ephemeral groups whose subscribers are all gone.
    fn prune_abandoned(&mut self) {
        self.groups
            .retain(|_, group| group.is_durable() || group.members.iter().any(|m| !m.is_closed()));
    }
}

#[derive(Debug, Default)]
struct BusState {
    channels: HashMap<String, Channel>,
    next_inbox: u64,
}

/// Event bus living entirely in this process.
#[derive(Debug, Clone)]
pub struct InMemoryBus {
    state: Arc<Mutex<BusState>>,
    max_msgs: usize,
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self {
            state: Arc::default(),
            max_msgs: DEFAULT_MAX_MSGS,
        }
    }
}

impl InMemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `max_msgs` messages per subject (at least one).
    pub fn with_max_msgs(mut self, max_msgs: usize) -> Self {
        self.max_msgs = max_msgs.max(1);
        self
    }

    /// Number of messages ever published on `subject`, including trimmed ones.
    pub async fn published_count(&self, subject: &str) -> usize {
        let state = self.state.lock().await;
        state
            .channels
            .get(subject)
            .map_or(0, |c| c.last_sequence as usize)
    }

    /// Oldest sequence still retained on `subject`, where a replay begins.
    pub async fn first_sequence(&self, subject: &str) -> Option<u64> {
        let state = self.state.lock().await;
        state
            .channels
            .get(subject)
            .and_then(|c| c.log.front())
            .map(|stored| stored.sequence)
    }

    fn deliver(&self, state: &mut BusState, subject: &str, group_key: &str, delivery: Delivery) {
        let Some(channel) = state.channels.get_mut(subject) else {
            return;
        };
        let Some(group) = channel.groups.get_mut(group_key) else {
            return;
        };

        if group.send_round_robin(delivery.to_message(subject)) {
            trace!(subject, group = group_key, sequence = delivery.stored.sequence, "delivered");
            if group.options.manual_ack {
                let ack_wait = group.options.ack_wait;
                self.schedule_redelivery(subject, group_key, delivery, ack_wait);
            } else {
                delivery.acked.store(true, Ordering::Release);
            }
            return;
        }

        if group.is_durable() {
            group.pending.push_back(delivery);
        } else {
            channel.groups.remove(group_key);
        }
    }

    fn schedule_redelivery(
        &self,
        subject: &str,
        group_key: &str,
        delivery: Delivery,
        ack_wait: std::time::Duration,
    ) {
        let bus = self.clone();
        let subject = subject.to_string();
        let group_key = group_key.to_string();

        tokio::spawn(async move {
            tokio::time::sleep(ack_wait).await;
            if delivery.acked.load(Ordering::Acquire) {
                return;
            }

            debug!(
                subject = %subject,
                group = %group_key,
                sequence = delivery.stored.sequence,
                "ack wait elapsed, redelivering"
            );
            let mut state = bus.state.lock().await;
            bus.deliver(
                &mut state,
                &subject,
                &group_key,
                Delivery {
                    redelivered: true,
                    ..delivery
                },
            );
        });
    }
}

#[async_trait]
impl EventBus for InMemoryBus {
    async fn publish(&self, subject: &str, payload: Vec<u8>) -> EventResult<u64> {
        if subject.is_empty() {
            return Err(EventBusError::PublishFailed {
                subject: subject.to_string(),
                reason: "subject must not be empty".to_string(),
            });
        }

        let mut state = self.state.lock().await;
        let channel = state.channels.entry(subject.to_string()).or_default();
        let stored = channel.append(payload, self.max_msgs);
        let group_keys: Vec<String> = channel.groups.keys().cloned().collect();

        for key in group_keys {
            self.deliver(&mut state, subject, &key, Delivery::new(stored.clone()));
        }

        debug!(subject, sequence = stored.sequence, "published");
        Ok(stored.sequence)
    }

    async fn subscribe(
        &self,
        subject: &str,
        options: SubscriptionOptions,
    ) -> EventResult<Subscription> {
        if subject.is_empty() {
            return Err(EventBusError::SubscriptionFailed {
                subject: subject.to_string(),
                reason: "subject must not be empty".to_string(),
            });
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let mut state = self.state.lock().await;

        let group_key = match &options.queue_group {
            Some(name) => name.clone(),
            None => {
                state.next_inbox += 1;
                format!("_INBOX.{}", state.next_inbox)
            }
        };

        let channel = state.channels.entry(subject.to_string()).or_default();
        channel.prune_abandoned();
        let backlog: Vec<Delivery> = match channel.groups.get_mut(&group_key) {
            Some(group) => {
                group.members.push(sender);
                group.pending.drain(..).collect()
            }
            None => {
                let replay = if options.deliver_all_available {
                    channel.log.iter().cloned().map(Delivery::new).collect()
                } else {
                    Vec::new()
                };
                channel
                    .groups
                    .insert(group_key.clone(), Group::new(sender, options));
                replay
            }
        };

        for delivery in backlog {
            self.deliver(&mut state, subject, &group_key, delivery);
        }

        debug!(subject, group = %group_key, "subscribed");
        Ok(Subscription::new(subject, group_key, receiver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sequences_are_per_subject() {
        let bus = InMemoryBus::new();

        assert_eq!(bus.publish("a", vec![1]).await.unwrap(), 1);
        assert_eq!(bus.publish("a", vec![2]).await.unwrap(), 2);
        assert_eq!(bus.publish("b", vec![3]).await.unwrap(), 1);
        assert_eq!(bus.published_count("a").await, 2);
    }

    #[tokio::test]
    async fn test_empty_subject_is_rejected() {
        let bus = InMemoryBus::new();

        assert!(matches!(
            bus.publish("", vec![]).await,
            Err(EventBusError::PublishFailed { .. })
        ));
        assert!(matches!(
            bus.subscribe("", SubscriptionOptions::default()).await,
            Err(EventBusError::SubscriptionFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_plain_subscribers_each_get_every_message() {
        let bus = InMemoryBus::new();
        let mut first = bus.subscribe("s", SubscriptionOptions::default()).await.unwrap();
        let mut second = bus.subscribe("s", SubscriptionOptions::default()).await.unwrap();
        assert_ne!(first.group(), second.group());

        bus.publish("s", b"hello".to_vec()).await.unwrap();

        assert_eq!(first.next().await.unwrap().data(), b"hello");
        assert_eq!(second.next().await.unwrap().data(), b"hello");
    }

    #[tokio::test]
    async fn test_auto_ack_marks_delivery_acked() {
        let bus = InMemoryBus::new();
        let mut sub = bus.subscribe("s", SubscriptionOptions::default()).await.unwrap();

        bus.publish("s", vec![]).await.unwrap();

        assert!(sub.next().await.unwrap().is_acked());
    }

    #[tokio::test]
    async fn test_late_subscriber_without_replay_sees_only_new_messages() {
        let bus = InMemoryBus::new();
        bus.publish("s", b"old".to_vec()).await.unwrap();

        let mut sub = bus.subscribe("s", SubscriptionOptions::default()).await.unwrap();
        bus.publish("s", b"new".to_vec()).await.unwrap();

        let msg = sub.next().await.unwrap();
        assert_eq!(msg.data(), b"new");
        assert_eq!(msg.sequence(), 2);
    }

    #[tokio::test]
    async fn test_dropped_ephemeral_subscription_is_forgotten() {
        let bus = InMemoryBus::new();
        let sub = bus.subscribe("s", SubscriptionOptions::default()).await.unwrap();
        drop(sub);

        bus.publish("s", vec![]).await.unwrap();

        let state = bus.state.lock().await;
        assert!(state.channels["s"].groups.is_empty());
    }

    #[tokio::test]
    async fn test_abandoned_ephemeral_groups_pruned_on_subscribe() {
        let bus = InMemoryBus::new();
        drop(bus.subscribe("s", SubscriptionOptions::default()).await.unwrap());
        drop(bus.subscribe("s", SubscriptionOptions::default()).await.unwrap());
        let durable = SubscriptionOptions::default().queue_group("keep");
        drop(bus.subscribe("s", durable).await.unwrap());

        let _live = bus.subscribe("s", SubscriptionOptions::default()).await.unwrap();

        let state = bus.state.lock().await;
        let groups = &state.channels["s"].groups;
        assert_eq!(groups.len(), 2);
        assert!(groups.contains_key("keep"));
    }

    #[tokio::test]
    async fn test_channel_limit_trims_oldest_and_keeps_sequences() {
        let bus = InMemoryBus::new().with_max_msgs(2);
        for i in 1..=5u8 {
            assert_eq!(bus.publish("s", vec![i]).await.unwrap(), i as u64);
        }

        assert_eq!(bus.published_count("s").await, 5);
        assert_eq!(bus.first_sequence("s").await, Some(4));
        assert_eq!(bus.first_sequence("other").await, None);

        let mut replay = bus
            .subscribe("s", SubscriptionOptions::default().deliver_all_available())
            .await
            .unwrap();
        let first = replay.next().await.unwrap();
        assert_eq!((first.sequence(), first.data()), (4, &[4u8][..]));
        assert_eq!(replay.next().await.unwrap().sequence(), 5);
    }

    #[tokio::test]
    async fn test_round_robin_skips_closed_members() {
        let bus = InMemoryBus::new();
        let options = SubscriptionOptions::default().queue_group("workers");
        let mut a = bus.subscribe("s", options.clone()).await.unwrap();
        let b = bus.subscribe("s", options.clone()).await.unwrap();
        drop(b);

        bus.publish("s", vec![1]).await.unwrap();
        bus.publish("s", vec![2]).await.unwrap();

        assert_eq!(a.next().await.unwrap().data(), &[1]);
        assert_eq!(a.next().await.unwrap().data(), &[2]);
    }
}
