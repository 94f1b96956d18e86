//! API endpoint for the public pack catalog

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::entitlement::{Pack, PricingTable, TierLimits};

/// One entry in the pack catalog
#[derive(Debug, Serialize)]
pub struct PackCatalogEntry {
    pub pack: Pack,
    pub limits: TierLimits,
    pub monthly_price_cents: i64,
    pub currency: &'static str,
}

/// GET /api/packs - Published packs with their limits and prices
pub async fn list_packs(State(state): State<Arc<AppState>>) -> Json<Vec<PackCatalogEntry>> {
    let entries = Pack::ALL
        .iter()
        .map(|&pack| PackCatalogEntry {
            pack,
            limits: state.tiers.limits(pack).clone(),
            monthly_price_cents: state.pricing.monthly_price_cents(pack),
            currency: PricingTable::CURRENCY,
        })
        .collect();

    Json(entries)
}
