//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared across the ticketing services.

pub mod constants;
pub mod error;
pub mod order;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use order::OrderStatus;
pub use password::Password;
pub use user::{User, UserResponse};
