//! Usage ledger module
//!
//! Persistent store for per-user usage counters and premium windows. The
//! entitlement resolver and quota gate read snapshots from here; the
//! marketplace's write paths call the record/reset methods.

pub mod manager;

pub use manager::LedgerManager;
