//! Premium entitlements and quota enforcement
//!
//! This module provides:
//! - The canonical tier-limit table and premium window resolution
//! - The quota gate deciding whether a usage-limited action is permitted
//! - Premium/pack guards for protected routes
//! - The pack pricing catalog

pub mod gate;
pub mod guards;
pub mod pricing;
pub mod resolver;
pub mod types;

pub use gate::{can_perform, remaining};
pub use guards::{require_pack, require_premium};
pub use pricing::PricingTable;
pub use resolver::{is_premium_active, is_premium_active_at, TierTable};
pub use types::{
    ActionKind, Decision, Pack, RemainingQuota, TierLimits, UsageCounters, UserEntitlement,
    UNLIMITED,
};
