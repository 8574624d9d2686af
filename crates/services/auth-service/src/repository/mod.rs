//! Repository layer for user data.

mod user_repository;

pub use user_repository::{InMemoryUserStore, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
