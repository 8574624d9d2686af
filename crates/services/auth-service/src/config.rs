//! Auth service configuration.

use common::{env_or, parse_env, ConfigError, JwtConfig, ServiceConfig};

/// Auth service configuration.
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Bind address
    pub service: ServiceConfig,
    /// Token signing
    pub jwt: JwtConfig,
    /// Mark the session cookie `Secure` (HTTPS only)
    pub session_secure: bool,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails when `JWT_KEY` is missing or a numeric/boolean variable does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = ServiceConfig::default();
        Ok(Self {
            service: ServiceConfig {
                service_name: "auth-service".to_string(),
                host: env_or("AUTH_SERVICE_HOST", &defaults.host),
                port: parse_env("AUTH_SERVICE_PORT", defaults.port)?,
            },
            jwt: JwtConfig::from_env()?,
            session_secure: parse_env("SESSION_SECURE", false)?,
        })
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "auth-service".to_string(),
                ..ServiceConfig::default()
            },
            jwt: JwtConfig::default(),
            session_secure: false,
        }
    }
}
