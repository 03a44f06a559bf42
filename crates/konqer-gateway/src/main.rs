//! konqer-api binary
//!
//! Loads configuration from the environment, wires the builtin catalog into
//! the server, and runs until SIGINT/SIGTERM.

use konqer_core::ServiceCatalog;
use konqer_gateway::{ApiConfig, ApiServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();

    init_logging();

    let config = ApiConfig::from_env()?;
    let server = ApiServer::new(config, ServiceCatalog::builtin());

    server.run().await
}

fn init_logging() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Default filter when RUST_LOG is not set
        EnvFilter::new("info")
            .add_directive("konqer_core=debug".parse().unwrap())
            .add_directive("konqer_gateway=debug".parse().unwrap())
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact())
        .init();
}
