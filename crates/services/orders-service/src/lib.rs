//! Orders Service Library
//!
//! Event publishers owned by the orders service. Other services learn about
//! orders only through these events.

pub mod events;

pub use crate::events::publishers::OrderCreatedPublisher;
