use dotenvy::dotenv;

mod config;
mod formatting;
mod navigation;
mod setup;
mod view;

use config::{app_config::AppConfig, storage_config::init_storage};
use setup::{app::App, dependency_injection::DependencyContainer};

/// Floating cart entry point
///
/// Initializes logging, opens on-device storage, wires the cart and runs the
/// line-based event loop on stdin.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Open storage
    let storage = init_storage(&config.storage).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config, storage);

    // 6. Run
    App::run(container).await?;

    Ok(())
}
