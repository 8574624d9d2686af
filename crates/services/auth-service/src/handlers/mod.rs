//! HTTP handlers.

pub mod auth_handler;
pub mod current_user_handler;
pub mod health_handler;

pub use auth_handler::auth_routes;
pub use health_handler::health_routes;

use common::AppError;

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
