//! Usage ledger - persistent per-user counters and premium windows
//!
//! The entitlement core only ever reads this store. The write methods here
//! are for the marketplace's own flows (ad posting, featuring, boosting) and
//! for subscription changes.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::entitlement::types::{Pack, UserEntitlement};
use crate::error::AdsError;

/// Manages the per-user usage ledger
#[derive(Clone)]
pub struct LedgerManager {
    db: SqlitePool,
}

impl LedgerManager {
    /// Create a new ledger manager
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Initialize database tables
    pub async fn init_db(&self) -> Result<(), AdsError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_entitlements (
                user_id TEXT PRIMARY KEY,
                pack TEXT NOT NULL DEFAULT 'simple',
                ads_count INTEGER NOT NULL DEFAULT 0,
                featured_ads_used INTEGER NOT NULL DEFAULT 0,
                ad_modifications_used INTEGER NOT NULL DEFAULT 0,
                boost_count_used INTEGER NOT NULL DEFAULT 0,
                premium_start_date TEXT,
                premium_end_date TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Fetch the current usage snapshot for a user
    pub async fn get_usage(&self, user_id: &str) -> Result<UserEntitlement, AdsError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, pack, ads_count, featured_ads_used, ad_modifications_used,
                   boost_count_used, premium_start_date, premium_end_date
            FROM user_entitlements
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => self.row_to_entitlement(row),
            None => Err(AdsError::NotFound(format!(
                "No entitlement record for user '{}'",
                user_id
            ))),
        }
    }

    /// Create or replace a user's entitlement record
    pub async fn upsert_usage(&self, entitlement: &UserEntitlement) -> Result<(), AdsError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_entitlements (
                user_id, pack, ads_count, featured_ads_used, ad_modifications_used,
                boost_count_used, premium_start_date, premium_end_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                pack = excluded.pack,
                ads_count = excluded.ads_count,
                featured_ads_used = excluded.featured_ads_used,
                ad_modifications_used = excluded.ad_modifications_used,
                boost_count_used = excluded.boost_count_used,
                premium_start_date = excluded.premium_start_date,
                premium_end_date = excluded.premium_end_date,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&entitlement.user_id)
        .bind(&entitlement.pack)
        .bind(entitlement.ads_count)
        .bind(entitlement.featured_ads_used)
        .bind(entitlement.ad_modifications_used)
        .bind(entitlement.boost_count_used)
        .bind(entitlement.premium_start_date.map(|d| d.to_rfc3339()))
        .bind(entitlement.premium_end_date.map(|d| d.to_rfc3339()))
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Switch a user to a pack with the given premium window. Creates the
    /// record with zeroed counters if the user is new; existing counters are
    /// kept.
    pub async fn set_pack(
        &self,
        user_id: &str,
        pack: Pack,
        premium_start_date: Option<DateTime<Utc>>,
        premium_end_date: Option<DateTime<Utc>>,
    ) -> Result<(), AdsError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO user_entitlements (
                user_id, pack, premium_start_date, premium_end_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                pack = excluded.pack,
                premium_start_date = excluded.premium_start_date,
                premium_end_date = excluded.premium_end_date,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(pack.as_str())
        .bind(premium_start_date.map(|d| d.to_rfc3339()))
        .bind(premium_end_date.map(|d| d.to_rfc3339()))
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Record a published ad
    pub async fn record_ad_created(&self, user_id: &str) -> Result<(), AdsError> {
        let result = sqlx::query(
            "UPDATE user_entitlements SET ads_count = ads_count + 1, updated_at = ? WHERE user_id = ?",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(user_id)
        .execute(&self.db)
        .await?;

        self.require_row(result.rows_affected(), user_id)
    }

    /// Record a featured ad slot being used
    pub async fn record_ad_featured(&self, user_id: &str) -> Result<(), AdsError> {
        let result = sqlx::query(
            "UPDATE user_entitlements SET featured_ads_used = featured_ads_used + 1, updated_at = ? WHERE user_id = ?",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(user_id)
        .execute(&self.db)
        .await?;

        self.require_row(result.rows_affected(), user_id)
    }

    /// Record an ad modification
    pub async fn record_ad_modified(&self, user_id: &str) -> Result<(), AdsError> {
        let result = sqlx::query(
            "UPDATE user_entitlements SET ad_modifications_used = ad_modifications_used + 1, updated_at = ? WHERE user_id = ?",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(user_id)
        .execute(&self.db)
        .await?;

        self.require_row(result.rows_affected(), user_id)
    }

    /// Record a paid boost
    pub async fn record_boost_used(&self, user_id: &str) -> Result<(), AdsError> {
        let result = sqlx::query(
            "UPDATE user_entitlements SET boost_count_used = boost_count_used + 1, updated_at = ? WHERE user_id = ?",
        )
        .bind(Utc::now().to_rfc3339())
        .bind(user_id)
        .execute(&self.db)
        .await?;

        self.require_row(result.rows_affected(), user_id)
    }

    /// Reset all usage counters for a user (subscription renewal)
    pub async fn reset_usage(&self, user_id: &str) -> Result<(), AdsError> {
        let result = sqlx::query(
            r#"
            UPDATE user_entitlements
            SET ads_count = 0, featured_ads_used = 0, ad_modifications_used = 0,
                boost_count_used = 0, updated_at = ?
            WHERE user_id = ?
            "#,
        )
        .bind(Utc::now().to_rfc3339())
        .bind(user_id)
        .execute(&self.db)
        .await?;

        self.require_row(result.rows_affected(), user_id)
    }

    fn require_row(&self, rows_affected: u64, user_id: &str) -> Result<(), AdsError> {
        if rows_affected == 0 {
            Err(AdsError::NotFound(format!(
                "No entitlement record for user '{}'",
                user_id
            )))
        } else {
            Ok(())
        }
    }

    fn row_to_entitlement(&self, row: sqlx::sqlite::SqliteRow) -> Result<UserEntitlement, AdsError> {
        use sqlx::Row;

        let start_date_str: Option<String> = row.try_get("premium_start_date")?;
        let end_date_str: Option<String> = row.try_get("premium_end_date")?;

        let ads_count: i64 = row.try_get("ads_count")?;
        let featured_ads_used: i64 = row.try_get("featured_ads_used")?;
        let ad_modifications_used: i64 = row.try_get("ad_modifications_used")?;
        let boost_count_used: i64 = row.try_get("boost_count_used")?;

        Ok(UserEntitlement {
            user_id: row.try_get("user_id")?,
            pack: row.try_get("pack")?,
            // counters are never negative; clamp bad rows on the way out
            ads_count: ads_count.max(0),
            featured_ads_used: featured_ads_used.max(0),
            ad_modifications_used: ad_modifications_used.max(0),
            boost_count_used: boost_count_used.max(0),
            premium_start_date: start_date_str
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|d| d.with_timezone(&Utc)),
            premium_end_date: end_date_str
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|d| d.with_timezone(&Utc)),
        })
    }
}
