//! Combined binary for development - runs the services in one process
//! sharing an in-memory event bus.
//!
//! No HTTP route publishes events yet, so the tickets listeners sit idle on
//! the bus. It exists so an embedded orders component can share it; the
//! publish-to-listener path is exercised in tickets-service's tests.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use events::{EventBus, InMemoryBus};
use tracing::{error, info};

use auth_service_lib::config::AuthServiceConfig;
use tickets_service_lib::config::TicketsServiceConfig;

#[derive(Parser)]
#[command(name = "ticketing")]
#[command(about = "Combined ticketing services binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, env = "AUTH_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "AUTH_SERVICE_PORT", default_value = "3000")]
        auth_port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), auth_service_lib::BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, auth_port } => {
            // Fail fast on bad configuration before anything is spawned
            let mut auth_config = AuthServiceConfig::from_env()?;
            auth_config.service.host = host;
            auth_config.service.port = auth_port;
            let tickets_config = TicketsServiceConfig::from_env()?;

            info!("Starting combined services in development mode");
            info!(
                "  Auth service: http://{}:{}",
                auth_config.service.host, auth_config.service.port
            );
            info!(
                "  Event bus:    in-memory ({})",
                tickets_config.event_bus.client_id
            );

            let bus: Arc<dyn EventBus> = Arc::new(InMemoryBus::new());

            let mut listener_handles = tickets_service_lib::run_listeners(bus, &tickets_config);
            let listeners = async {
                for handle in listener_handles.iter_mut() {
                    let _ = handle.await;
                }
            };

            let auth_handle = tokio::spawn(async move {
                if let Err(e) = auth_service_lib::run_server_with_config(auth_config).await {
                    error!("Auth service failed: {}", e);
                }
            });

            // Wait for any service to exit (which would indicate an error)
            tokio::select! {
                _ = auth_handle => {
                    error!("Auth service exited unexpectedly");
                }
                _ = listeners => {
                    error!("Tickets listeners exited unexpectedly");
                }
            }
        }
    }

    Ok(())
}
