//! Quota gate: pure allow/deny decisions over an entitlement snapshot
//!
//! Every decision is recomputed from the snapshot it is given; nothing here
//! mutates a counter or keeps state between calls. Counter increments belong
//! to the ledger's write paths.

use super::resolver::TierTable;
use super::types::{ActionKind, Decision, RemainingQuota, TierLimits, UserEntitlement, UNLIMITED};

fn within_limit(limit: i64, used: i64) -> bool {
    limit == UNLIMITED || used < limit
}

/// Decide whether `action` is permitted under the user's current entitlement.
///
/// Premium-window activity is deliberately not consulted here; the guards in
/// [`super::guards`] are the premium gate. Usage at or above the limit denies,
/// one below allows.
pub fn can_perform(
    table: &TierTable,
    entitlement: &UserEntitlement,
    action: ActionKind,
) -> Decision {
    let limits = table.resolve(&entitlement.pack);

    let (can_do, reason) = match action {
        ActionKind::CreateAd => {
            if within_limit(limits.max_ads, entitlement.ads_count) {
                (true, String::new())
            } else {
                (
                    false,
                    format!(
                        "Ad limit reached: {} of {} ads used",
                        entitlement.ads_count, limits.max_ads
                    ),
                )
            }
        }
        ActionKind::FeatureAd => {
            if within_limit(limits.max_featured_ads, entitlement.featured_ads_used) {
                (true, String::new())
            } else {
                (
                    false,
                    format!(
                        "Featured ad limit reached: {} of {} featured slots used",
                        entitlement.featured_ads_used, limits.max_featured_ads
                    ),
                )
            }
        }
        ActionKind::ModifyAd => {
            if within_limit(limits.max_modifications, entitlement.ad_modifications_used) {
                (true, String::new())
            } else {
                (
                    false,
                    format!(
                        "Modification limit reached: {} of {} modifications used",
                        entitlement.ad_modifications_used, limits.max_modifications
                    ),
                )
            }
        }
        // Boosts are paid per use, never quota-limited
        ActionKind::BoostAd => (true, String::new()),
    };

    Decision {
        can_do,
        reason,
        limits: limits.clone(),
    }
}

/// Remaining quota for each limited action: `max(0, limit - used)`, with the
/// `-1` sentinel passed through for unlimited fields.
pub fn remaining(limits: &TierLimits, entitlement: &UserEntitlement) -> RemainingQuota {
    RemainingQuota {
        ads: remaining_for(limits.max_ads, entitlement.ads_count),
        featured_ads: remaining_for(limits.max_featured_ads, entitlement.featured_ads_used),
        modifications: remaining_for(limits.max_modifications, entitlement.ad_modifications_used),
    }
}

fn remaining_for(limit: i64, used: i64) -> i64 {
    if limit == UNLIMITED {
        UNLIMITED
    } else {
        (limit - used).max(0)
    }
}
