//! Events emitted by the orders service.

pub mod publishers;
