//! Common utilities shared across all ticketing services.
//!
//! This crate provides:
//! - Centralized error handling mapped to HTTP responses
//! - Configuration structures loaded from the environment
//! - Tracing setup for the binaries

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult, ErrorEntry, ErrorResponse};
pub use telemetry::init_tracing;
