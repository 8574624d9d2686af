//! Event contracts and messaging for the ticketing services.
//!
//! - [`Subject`] names the channels events travel on
//! - [`Event`] ties a payload type to its subject
//! - [`EventBus`] is the broker client seam; [`InMemoryBus`] runs in-process
//! - [`Publisher`] and [`Listener`] are the extension points services implement

pub mod bus;
pub mod error;
pub mod event;
pub mod listener;
pub mod memory;
pub mod message;
pub mod publisher;
pub mod subject;

pub use bus::{EventBus, Subscription, SubscriptionOptions, DEFAULT_ACK_WAIT};
pub use error::{EventBusError, EventResult};
pub use event::{Event, OrderCreatedData, OrderCreatedEvent, TicketSnapshot};
pub use listener::{Listener, LISTENER_ACK_WAIT};
pub use memory::{InMemoryBus, DEFAULT_MAX_MSGS};
pub use message::Message;
pub use publisher::Publisher;
pub use subject::Subject;
