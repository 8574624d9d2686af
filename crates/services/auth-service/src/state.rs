//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::AuthService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub session_secure: bool,
}

impl AppState {
    /// Create new app state.
    pub fn new(auth_service: Arc<dyn AuthService>, session_secure: bool) -> Self {
        Self {
            auth_service,
            session_secure,
        }
    }
}
