use ads_rs::api::ApiServer;
use ads_rs::config::Config;
use ads_rs::ledger::LedgerManager;
use sqlx::SqlitePool;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level = match config.logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting ads-rs server");
    info!("  API listening on: {}", config.server.listen_addr);
    info!("  Database: {}", config.storage.database_url);

    // Initialize the usage ledger
    let pool = SqlitePool::connect(&config.storage.database_url).await?;
    let ledger = LedgerManager::new(pool);
    ledger.init_db().await?;

    // Start the API server
    let server = ApiServer::new(ledger, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}
