//! Publishers, one per emitted subject.

mod order_created_publisher;

pub use order_created_publisher::OrderCreatedPublisher;
