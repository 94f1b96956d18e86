//! Shared API state, error mapping and the health endpoint

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::warn;

use crate::entitlement::{PricingTable, TierTable};
use crate::error::AdsError;
use crate::ledger::LedgerManager;

/// Shared application state
pub struct AppState {
    pub ledger: LedgerManager,
    pub tiers: TierTable,
    pub pricing: PricingTable,
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

/// Map a domain error to an HTTP response
pub fn error_response(err: AdsError) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        AdsError::NotFound(_) => StatusCode::NOT_FOUND,
        AdsError::InvalidAction(_) => StatusCode::BAD_REQUEST,
        AdsError::Forbidden(_) => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status == StatusCode::INTERNAL_SERVER_ERROR {
        warn!("Internal error: {}", err);
    }

    (status, Json(ApiError::new(&err.to_string())))
}

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
