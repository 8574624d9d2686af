//! Listeners, one per consumed subject.

mod order_created_listener;
mod queue_group_name;

pub use order_created_listener::OrderCreatedListener;
pub use queue_group_name::QUEUE_GROUP_NAME;
