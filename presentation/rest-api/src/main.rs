use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod validation;
    pub mod health {
        pub mod routes;
    }
    pub mod shopping_item {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
        pub mod validation;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod server_config;
    pub mod storage_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
/// - config/: Application configuration (server, CORS, storage)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs, request validation and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies (connects and migrates the database when configured)
    let container = DependencyContainer::new(&config.storage).await?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
