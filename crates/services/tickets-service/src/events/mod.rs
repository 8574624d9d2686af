//! Events consumed by the tickets service.

pub mod listeners;
