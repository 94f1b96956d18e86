//! Integration tests for the usage ledger

use ads_rs::entitlement::{Pack, UserEntitlement};
use ads_rs::error::AdsError;
use ads_rs::ledger::LedgerManager;
use chrono::{Duration, TimeZone, Utc};
use sqlx::SqlitePool;

async fn setup_test_db() -> LedgerManager {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    let manager = LedgerManager::new(pool);
    manager.init_db().await.unwrap();
    manager
}

#[tokio::test]
async fn test_get_usage_unknown_user() {
    let manager = setup_test_db().await;

    let result = manager.get_usage("nobody").await;
    assert!(matches!(result, Err(AdsError::NotFound(_))));
}

#[tokio::test]
async fn test_upsert_and_get_round_trip() {
    let manager = setup_test_db().await;

    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();

    let mut entitlement = UserEntitlement::new("user-1".to_string(), Pack::Pro);
    entitlement.ads_count = 12;
    entitlement.featured_ads_used = 2;
    entitlement.ad_modifications_used = 7;
    entitlement.boost_count_used = 1;
    entitlement.premium_start_date = Some(start);
    entitlement.premium_end_date = Some(end);

    manager.upsert_usage(&entitlement).await.unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched, entitlement);
}

#[tokio::test]
async fn test_upsert_replaces_existing() {
    let manager = setup_test_db().await;

    let mut entitlement = UserEntitlement::new("user-1".to_string(), Pack::Starter);
    entitlement.ads_count = 5;
    manager.upsert_usage(&entitlement).await.unwrap();

    entitlement.pack = "pro".to_string();
    entitlement.ads_count = 20;
    manager.upsert_usage(&entitlement).await.unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.pack, "pro");
    assert_eq!(fetched.ads_count, 20);
}

#[tokio::test]
async fn test_set_pack_creates_record_with_zeroed_counters() {
    let manager = setup_test_db().await;

    let end = Utc::now() + Duration::days(30);
    manager
        .set_pack("user-1", Pack::Pro, Some(Utc::now()), Some(end))
        .await
        .unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.pack, "pro");
    assert_eq!(fetched.ads_count, 0);
    assert_eq!(fetched.featured_ads_used, 0);
    assert!(fetched.premium_end_date.is_some());
}

#[tokio::test]
async fn test_set_pack_keeps_existing_counters() {
    let manager = setup_test_db().await;

    let mut entitlement = UserEntitlement::new("user-1".to_string(), Pack::Starter);
    entitlement.ads_count = 8;
    manager.upsert_usage(&entitlement).await.unwrap();

    manager
        .set_pack(
            "user-1",
            Pack::Pro,
            Some(Utc::now()),
            Some(Utc::now() + Duration::days(30)),
        )
        .await
        .unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.pack, "pro");
    assert_eq!(fetched.ads_count, 8);
}

#[tokio::test]
async fn test_record_increments() {
    let manager = setup_test_db().await;

    let entitlement = UserEntitlement::new("user-1".to_string(), Pack::Entreprise);
    manager.upsert_usage(&entitlement).await.unwrap();

    manager.record_ad_created("user-1").await.unwrap();
    manager.record_ad_created("user-1").await.unwrap();
    manager.record_ad_featured("user-1").await.unwrap();
    manager.record_ad_modified("user-1").await.unwrap();
    manager.record_boost_used("user-1").await.unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.ads_count, 2);
    assert_eq!(fetched.featured_ads_used, 1);
    assert_eq!(fetched.ad_modifications_used, 1);
    assert_eq!(fetched.boost_count_used, 1);
}

#[tokio::test]
async fn test_record_for_unknown_user() {
    let manager = setup_test_db().await;

    let result = manager.record_ad_created("nobody").await;
    assert!(matches!(result, Err(AdsError::NotFound(_))));
}

#[tokio::test]
async fn test_reset_usage() {
    let manager = setup_test_db().await;

    let mut entitlement = UserEntitlement::new("user-1".to_string(), Pack::Pro);
    entitlement.ads_count = 12;
    entitlement.featured_ads_used = 3;
    entitlement.ad_modifications_used = 5;
    entitlement.boost_count_used = 2;
    manager.upsert_usage(&entitlement).await.unwrap();

    manager.reset_usage("user-1").await.unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.ads_count, 0);
    assert_eq!(fetched.featured_ads_used, 0);
    assert_eq!(fetched.ad_modifications_used, 0);
    assert_eq!(fetched.boost_count_used, 0);
    // pack and window survive a counter reset
    assert_eq!(fetched.pack, "pro");
}

#[tokio::test]
async fn test_negative_counters_clamped_on_read() {
    let manager = setup_test_db().await;

    let mut entitlement = UserEntitlement::new("user-1".to_string(), Pack::Simple);
    entitlement.ads_count = -5;
    manager.upsert_usage(&entitlement).await.unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.ads_count, 0);
}

#[tokio::test]
async fn test_unknown_pack_string_survives_storage() {
    let manager = setup_test_db().await;

    let mut entitlement = UserEntitlement::new("user-1".to_string(), Pack::Simple);
    entitlement.pack = "vip".to_string();
    manager.upsert_usage(&entitlement).await.unwrap();

    let fetched = manager.get_usage("user-1").await.unwrap();
    assert_eq!(fetched.pack, "vip");
}
