//! API endpoints for entitlements and quota checks

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::api::handlers::{error_response, ApiError, AppState};
use crate::entitlement::{
    can_perform, is_premium_active, remaining, require_premium, ActionKind, RemainingQuota,
    TierLimits, UsageCounters,
};
use crate::error::AdsError;

/// Response for the entitlement summary endpoint
#[derive(Debug, Serialize)]
pub struct EntitlementSummary {
    pub current_pack: String,
    pub is_premium_active: bool,
    pub limits: TierLimits,
    pub usage: UsageCounters,
    pub remaining: RemainingQuota,
}

/// Request body for the quota check endpoint
#[derive(Debug, Deserialize)]
pub struct CheckActionRequest {
    pub action: Option<String>,
}

/// Response for the quota check endpoint
#[derive(Debug, Serialize)]
pub struct CheckActionResponse {
    pub can_do: bool,
    pub reason: String,
    pub current_pack: String,
    pub limits: TierLimits,
}

/// Query parameters for the stats endpoint
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub advanced: bool,
}

/// Response for the stats dashboard endpoint
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub current_pack: String,
    pub usage: UsageCounters,
    pub remaining: RemainingQuota,
    pub premium_start_date: Option<DateTime<Utc>>,
    pub premium_end_date: Option<DateTime<Utc>>,
}

/// GET /api/users/:user_id/entitlements - Current limits and remaining quota
pub async fn get_entitlements(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<EntitlementSummary>, (StatusCode, Json<ApiError>)> {
    let entitlement = state
        .ledger
        .get_usage(&user_id)
        .await
        .map_err(error_response)?;

    let limits = state.tiers.resolve(&entitlement.pack);

    Ok(Json(EntitlementSummary {
        current_pack: entitlement.pack.clone(),
        is_premium_active: is_premium_active(entitlement.premium_end_date),
        limits: limits.clone(),
        usage: UsageCounters::from(&entitlement),
        remaining: remaining(limits, &entitlement),
    }))
}

/// POST /api/users/:user_id/entitlements/check - Can the user perform an action?
pub async fn check_action(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(payload): Json<CheckActionRequest>,
) -> Result<Json<CheckActionResponse>, (StatusCode, Json<ApiError>)> {
    let action = match payload.action.as_deref() {
        None => {
            return Err(error_response(AdsError::InvalidAction(
                "Missing 'action' field".to_string(),
            )))
        }
        Some(name) => ActionKind::from_name(name).ok_or_else(|| {
            error_response(AdsError::InvalidAction(format!(
                "Unknown action '{}'; expected one of create_ad, feature_ad, modify_ad, boost_ad",
                name
            )))
        })?,
    };

    let entitlement = state
        .ledger
        .get_usage(&user_id)
        .await
        .map_err(error_response)?;

    let decision = can_perform(&state.tiers, &entitlement, action);
    if !decision.can_do {
        debug!(
            "Denied {} for user '{}': {}",
            action, user_id, decision.reason
        );
    }

    Ok(Json(CheckActionResponse {
        can_do: decision.can_do,
        reason: decision.reason,
        current_pack: entitlement.pack,
        limits: decision.limits,
    }))
}

/// GET /api/users/:user_id/stats - Usage dashboard, premium only
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, (StatusCode, Json<ApiError>)> {
    let entitlement = state
        .ledger
        .get_usage(&user_id)
        .await
        .map_err(error_response)?;

    require_premium(&entitlement).map_err(error_response)?;

    let limits = state.tiers.resolve(&entitlement.pack);
    if !limits.has_stats {
        return Err(error_response(AdsError::Forbidden(format!(
            "Pack '{}' does not include the stats dashboard",
            entitlement.pack
        ))));
    }
    if query.advanced && !limits.has_advanced_stats {
        return Err(error_response(AdsError::Forbidden(format!(
            "Pack '{}' does not include advanced stats",
            entitlement.pack
        ))));
    }

    Ok(Json(StatsResponse {
        current_pack: entitlement.pack.clone(),
        usage: UsageCounters::from(&entitlement),
        remaining: remaining(limits, &entitlement),
        premium_start_date: entitlement.premium_start_date,
        premium_end_date: entitlement.premium_end_date,
    }))
}
