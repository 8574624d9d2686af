//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Maximum password length accepted at signup
pub const MAX_PASSWORD_LENGTH: usize = 20;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Name of the cookie that carries the session
pub const SESSION_COOKIE_NAME: &str = "session";

/// Message returned for any failed signin, regardless of the cause
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Message returned when signing up with an email that is already registered
pub const EMAIL_IN_USE_MESSAGE: &str = "Email in use";
