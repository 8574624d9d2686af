//! Auth Service - HTTP server for session authentication.

use clap::{Parser, Subcommand};

use auth_service_lib::config::AuthServiceConfig;

#[derive(Parser)]
#[command(name = "auth-service")]
#[command(about = "Authentication microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        #[arg(long, env = "AUTH_SERVICE_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(long, env = "AUTH_SERVICE_PORT", default_value = "3000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), auth_service_lib::BoxError> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::init_tracing("info");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let mut config = AuthServiceConfig::from_env()?;
            config.service.host = host;
            config.service.port = port;
            auth_service_lib::run_server_with_config(config).await?;
        }
    }

    Ok(())
}
