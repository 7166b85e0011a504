use clap::{Parser, Subcommand};
use petstore_apiserver::{ApiServer, AppState, Config as ApiConfig};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "petstore", about = "Petstore REST API server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => run_serve(&bind).await,
    }
}

/// Run the API server over a freshly seeded store
async fn run_serve(bind: &str) -> miette::Result<()> {
    info!("Starting petstore API server");

    let state = Arc::new(AppState::new());

    let config = ApiConfig {
        listen_addr: bind
            .parse()
            .map_err(|e| miette::miette!("Invalid bind address '{}': {}", bind, e))?,
    };

    let server = ApiServer::new(config, state);
    server
        .run()
        .await
        .map_err(|e| miette::miette!("API server error: {}", e))?;

    Ok(())
}
