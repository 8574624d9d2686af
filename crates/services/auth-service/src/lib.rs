//! Auth Service Library
//!
//! HTTP authentication for the ticketing platform: signin, signout, signup
//! and current-user lookup, with the JWT kept in a cookie session.
//! Runs standalone or inside the combined binary.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod service;
pub mod session;
pub mod state;

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AuthServiceConfig;
use crate::repository::InMemoryUserStore;
use crate::routes::create_router;
use crate::service::Authenticator;
use crate::state::AppState;

/// Errors surfaced by the server entry points.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Build the application with a fresh user store.
pub fn create_app(config: &AuthServiceConfig) -> Router {
    let users = Arc::new(InMemoryUserStore::new());
    let auth_service = Arc::new(Authenticator::new(users, config.jwt.clone()));
    let state = AppState::new(auth_service, config.session_secure);

    create_router(state).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server_with_config(config: AuthServiceConfig) -> Result<(), BoxError> {
    let app = create_app(&config);

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!("Auth service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
