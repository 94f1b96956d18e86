//! REST API module for ads-rs
//!
//! Provides HTTP API endpoints for entitlements, quota checks and the pack
//! catalog

pub mod entitlements;
pub mod handlers;
pub mod packs;
pub mod server;

pub use server::ApiServer;
