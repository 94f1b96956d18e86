//! Entitlement types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value meaning "no limit" for any quota field
pub const UNLIMITED: i64 = -1;

/// Subscription pack for a seller account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pack {
    Simple,
    Starter,
    Pro,
    Entreprise,
}

impl Pack {
    /// All packs, in catalog order
    pub const ALL: [Pack; 4] = [Pack::Simple, Pack::Starter, Pack::Pro, Pack::Entreprise];

    /// Parse a pack name as stored in the ledger. Returns `None` for
    /// anything that is not one of the four known packs.
    pub fn from_name(name: &str) -> Option<Pack> {
        match name {
            "simple" => Some(Pack::Simple),
            "starter" => Some(Pack::Starter),
            "pro" => Some(Pack::Pro),
            "entreprise" => Some(Pack::Entreprise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pack::Simple => "simple",
            Pack::Starter => "starter",
            Pack::Pro => "pro",
            Pack::Entreprise => "entreprise",
        }
    }
}

impl fmt::Display for Pack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limits granted by a pack. `-1` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// Maximum number of concurrently published ads
    pub max_ads: i64,
    /// Maximum number of photos per ad
    pub max_photos: i64,
    /// Maximum number of featured ads
    pub max_featured_ads: i64,
    /// Maximum number of ad modifications
    pub max_modifications: i64,
    /// Access to the basic stats dashboard
    pub has_stats: bool,
    /// Access to the advanced stats dashboard
    pub has_advanced_stats: bool,
    /// Automatic ad boosting
    pub has_auto_boost: bool,
    /// Number of seats for multi-user accounts (absent for single-seat packs)
    pub multi_users: Option<i64>,
}

/// Per-user entitlement snapshot, owned by the usage ledger.
///
/// `pack` is kept as the raw string the ledger stores so that unrecognized
/// values survive to the resolution layer, where they fall back to the
/// `simple` limits instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntitlement {
    pub user_id: String,
    pub pack: String,
    pub ads_count: i64,
    pub featured_ads_used: i64,
    pub ad_modifications_used: i64,
    pub boost_count_used: i64,
    pub premium_start_date: Option<DateTime<Utc>>,
    pub premium_end_date: Option<DateTime<Utc>>,
}

impl UserEntitlement {
    /// Create a fresh entitlement with zeroed counters and no premium window
    pub fn new(user_id: String, pack: Pack) -> Self {
        Self {
            user_id,
            pack: pack.as_str().to_string(),
            ads_count: 0,
            featured_ads_used: 0,
            ad_modifications_used: 0,
            boost_count_used: 0,
            premium_start_date: None,
            premium_end_date: None,
        }
    }
}

/// Quota-limited action a user may request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    CreateAd,
    FeatureAd,
    ModifyAd,
    BoostAd,
}

impl ActionKind {
    /// Parse an action name from the wire. Returns `None` for unrecognized
    /// names; callers must surface that as an invalid-action error, not a
    /// silent deny.
    pub fn from_name(name: &str) -> Option<ActionKind> {
        match name {
            "create_ad" => Some(ActionKind::CreateAd),
            "feature_ad" => Some(ActionKind::FeatureAd),
            "modify_ad" => Some(ActionKind::ModifyAd),
            "boost_ad" => Some(ActionKind::BoostAd),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::CreateAd => "create_ad",
            ActionKind::FeatureAd => "feature_ad",
            ActionKind::ModifyAd => "modify_ad",
            ActionKind::BoostAd => "boost_ad",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a quota check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Whether the action is permitted
    pub can_do: bool,
    /// Human-readable denial reason, empty when allowed
    pub reason: String,
    /// The limits the decision was made against
    pub limits: TierLimits,
}

/// Usage counters as read from the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageCounters {
    pub ads_count: i64,
    pub featured_ads_used: i64,
    pub ad_modifications_used: i64,
    pub boost_count_used: i64,
}

impl From<&UserEntitlement> for UsageCounters {
    fn from(entitlement: &UserEntitlement) -> Self {
        Self {
            ads_count: entitlement.ads_count,
            featured_ads_used: entitlement.featured_ads_used,
            ad_modifications_used: entitlement.ad_modifications_used,
            boost_count_used: entitlement.boost_count_used,
        }
    }
}

/// Remaining quota projection. `-1` passes through for unlimited fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemainingQuota {
    pub ads: i64,
    pub featured_ads: i64,
    pub modifications: i64,
}
