//! Shared configuration structures.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be defined")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Read a required variable.
pub fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

/// Read an optional variable, falling back to `default` when unset.
pub fn env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an optional variable. Unset yields `default`; a value
/// that does not parse is an error rather than a silent fallback.
pub fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// JWT configuration for authentication.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Load from `JWT_KEY` (required) and `JWT_EXPIRATION_HOURS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: require_env("JWT_KEY")?,
            expiration_hours: parse_env(
                "JWT_EXPIRATION_HOURS",
                domain::DEFAULT_JWT_EXPIRATION_HOURS,
            )?,
        })
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: domain::DEFAULT_JWT_EXPIRATION_HOURS,
        }
    }
}

/// Event bus client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventBusConfig {
    /// Client identifier used in bus logs
    pub client_id: String,
    /// How long a delivery may stay unacknowledged before redelivery
    pub ack_wait_ms: u64,
}

impl EventBusConfig {
    /// Load from `EVENT_BUS_CLIENT_ID` and `EVENT_ACK_WAIT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            client_id: env_or("EVENT_BUS_CLIENT_ID", &defaults.client_id),
            ack_wait_ms: parse_env("EVENT_ACK_WAIT_MS", defaults.ack_wait_ms)?,
        })
    }
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            client_id: "ticketing".to_string(),
            ack_wait_ms: 5000,
        }
    }
}
