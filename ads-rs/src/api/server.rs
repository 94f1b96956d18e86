//! API Server - HTTP server for the REST API

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::api::{entitlements, packs};
use crate::entitlement::{PricingTable, TierTable};
use crate::ledger::LedgerManager;

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
}

impl ApiServer {
    /// Create a new API server over the given ledger
    pub fn new(ledger: LedgerManager, addr: String) -> Self {
        let state = Arc::new(AppState {
            ledger,
            tiers: TierTable::builtin(),
            pricing: PricingTable::builtin(),
        });

        Self { state, addr }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        // CORS configuration
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api/packs", get(packs::list_packs))
            .route(
                "/api/users/:user_id/entitlements",
                get(entitlements::get_entitlements),
            )
            .route(
                "/api/users/:user_id/entitlements/check",
                post(entitlements::check_action),
            )
            .route("/api/users/:user_id/stats", get(entitlements::get_stats))
            .layer(cors)
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
