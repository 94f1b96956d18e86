//! Premium gating for protected routes
//!
//! Unlike the quota gate, these checks do require an active premium window.
//! An expired subscription can still pass `can_perform` but never a guard.

use crate::error::{AdsError, Result};

use super::resolver::is_premium_active;
use super::types::{Pack, UserEntitlement};

/// Require an active premium window
pub fn require_premium(entitlement: &UserEntitlement) -> Result<()> {
    if is_premium_active(entitlement.premium_end_date) {
        Ok(())
    } else {
        Err(AdsError::Forbidden(format!(
            "Active premium subscription required (pack '{}')",
            entitlement.pack
        )))
    }
}

/// Require one of the given packs, with an active premium window
pub fn require_pack(entitlement: &UserEntitlement, allowed: &[Pack]) -> Result<()> {
    match Pack::from_name(&entitlement.pack) {
        Some(pack) if allowed.contains(&pack) => require_premium(entitlement),
        _ => Err(AdsError::Forbidden(format!(
            "Pack '{}' does not grant access to this feature",
            entitlement.pack
        ))),
    }
}
