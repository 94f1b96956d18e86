//! Canonical tier-limit table and premium window resolution

use chrono::{DateTime, Utc};

use super::types::{Pack, TierLimits, UNLIMITED};

/// The one table mapping each pack to its limits.
///
/// Built once at startup and passed by reference into every quota check and
/// projection, so the published limits cannot drift between call sites.
#[derive(Debug, Clone)]
pub struct TierTable {
    simple: TierLimits,
    starter: TierLimits,
    pro: TierLimits,
    entreprise: TierLimits,
}

impl TierTable {
    /// The published tier table
    pub fn builtin() -> Self {
        Self {
            simple: TierLimits {
                max_ads: 3,
                max_photos: 3,
                max_featured_ads: 0,
                max_modifications: 1,
                has_stats: false,
                has_advanced_stats: false,
                has_auto_boost: false,
                multi_users: None,
            },
            starter: TierLimits {
                max_ads: 10,
                max_photos: 5,
                max_featured_ads: 0,
                max_modifications: 3,
                has_stats: true,
                has_advanced_stats: false,
                has_auto_boost: false,
                multi_users: None,
            },
            pro: TierLimits {
                max_ads: 50,
                max_photos: 10,
                max_featured_ads: 5,
                max_modifications: UNLIMITED,
                has_stats: true,
                has_advanced_stats: true,
                has_auto_boost: true,
                multi_users: None,
            },
            entreprise: TierLimits {
                max_ads: UNLIMITED,
                max_photos: 15,
                max_featured_ads: UNLIMITED,
                max_modifications: UNLIMITED,
                has_stats: true,
                has_advanced_stats: true,
                has_auto_boost: true,
                multi_users: Some(5),
            },
        }
    }

    /// Limits for a known pack
    pub fn limits(&self, pack: Pack) -> &TierLimits {
        match pack {
            Pack::Simple => &self.simple,
            Pack::Starter => &self.starter,
            Pack::Pro => &self.pro,
            Pack::Entreprise => &self.entreprise,
        }
    }

    /// Resolve a raw pack name as stored in the ledger.
    ///
    /// Unrecognized names fall back to the `simple` limits rather than
    /// failing, so a bad row can never take the quota gate down.
    pub fn resolve(&self, pack_name: &str) -> &TierLimits {
        match Pack::from_name(pack_name) {
            Some(pack) => self.limits(pack),
            None => &self.simple,
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether a premium window is active at wall-clock now.
///
/// A missing end date is always inactive, whatever the pack: every premium
/// grant carries an expiry.
pub fn is_premium_active(premium_end_date: Option<DateTime<Utc>>) -> bool {
    is_premium_active_at(premium_end_date, Utc::now())
}

/// Whether a premium window is active at `now`. The end instant itself is
/// already expired (strict comparison).
pub fn is_premium_active_at(premium_end_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match premium_end_date {
        Some(end) => end > now,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_builtin_table_values() {
        let table = TierTable::builtin();

        let simple = table.limits(Pack::Simple);
        assert_eq!(simple.max_ads, 3);
        assert_eq!(simple.max_featured_ads, 0);
        assert!(!simple.has_stats);
        assert!(simple.multi_users.is_none());

        let starter = table.limits(Pack::Starter);
        assert_eq!(starter.max_ads, 10);
        assert_eq!(starter.max_featured_ads, 0);
        assert!(starter.has_stats);
        assert!(!starter.has_advanced_stats);

        let pro = table.limits(Pack::Pro);
        assert_eq!(pro.max_ads, 50);
        assert_eq!(pro.max_featured_ads, 5);
        assert_eq!(pro.max_modifications, UNLIMITED);
        assert!(pro.has_auto_boost);

        let entreprise = table.limits(Pack::Entreprise);
        assert_eq!(entreprise.max_ads, UNLIMITED);
        assert_eq!(entreprise.max_featured_ads, UNLIMITED);
        assert_eq!(entreprise.multi_users, Some(5));
    }

    #[test]
    fn test_builtin_table_is_deterministic() {
        let a = TierTable::builtin();
        let b = TierTable::builtin();
        for pack in Pack::ALL {
            assert_eq!(a.limits(pack), b.limits(pack));
        }
    }

    #[test]
    fn test_resolve_known_packs() {
        let table = TierTable::builtin();
        for pack in Pack::ALL {
            assert_eq!(table.resolve(pack.as_str()), table.limits(pack));
        }
    }

    #[test]
    fn test_resolve_unknown_pack_falls_back_to_simple() {
        let table = TierTable::builtin();
        assert_eq!(table.resolve("vip"), table.limits(Pack::Simple));
        assert_eq!(table.resolve(""), table.limits(Pack::Simple));
        assert_eq!(table.resolve("Entreprise"), table.limits(Pack::Simple));
    }

    #[test]
    fn test_premium_active_none_is_inactive() {
        assert!(!is_premium_active(None));
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert!(!is_premium_active_at(None, now));
    }

    #[test]
    fn test_premium_active_future_end() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert!(is_premium_active_at(Some(now + Duration::days(30)), now));
        assert!(is_premium_active_at(Some(now + Duration::seconds(1)), now));
    }

    #[test]
    fn test_premium_active_past_or_exact_end() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert!(!is_premium_active_at(Some(now - Duration::days(1)), now));
        // strict comparison: a window ending exactly now is expired
        assert!(!is_premium_active_at(Some(now), now));
    }

    #[test]
    fn test_premium_active_wall_clock() {
        assert!(is_premium_active(Some(Utc::now() + Duration::days(1))));
        assert!(!is_premium_active(Some(Utc::now() - Duration::days(1))));
    }
}
