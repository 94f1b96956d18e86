//! ads-rs: Classified-ads marketplace backend
//!
//! The entitlement and quota core of a classified-ads marketplace: tiered
//! subscription packs, usage counters, and the decision logic gating
//! usage-limited actions.
//!
//! # Features
//!
//! - **Tier table**: one canonical, immutable table of pack limits
//! - **Quota gate**: pure allow/deny decisions over a usage snapshot
//! - **Premium guards**: active-window gating for protected routes
//! - **Usage ledger**: SQLite-backed per-user counters and premium windows
//! - **REST API**: entitlement summary, quota checks, pack catalog
//!
//! # Example
//!
//! ```no_run
//! use ads_rs::api::ApiServer;
//! use ads_rs::ledger::LedgerManager;
//! use sqlx::SqlitePool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = SqlitePool::connect("sqlite://ads.db?mode=rwc").await?;
//!     let ledger = LedgerManager::new(pool);
//!     ledger.init_db().await?;
//!
//!     let server = ApiServer::new(ledger, "0.0.0.0:8080".to_string());
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`entitlement`]: Tier limits, quota gate, premium guards, pricing
//! - [`ledger`]: Persistent usage counters
//! - [`api`]: REST API surface

pub mod api;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod ledger;

// Re-export commonly used types
pub use config::Config;
pub use error::{AdsError, Result};
