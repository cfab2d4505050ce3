//! # chantrack-store
//!
//! Persistence layer for the channel tracker: tracked channels and their
//! per-day revision markers, backed by SQLite.
//!
//! The crate exposes a synchronous [`Database`] handle that wraps a
//! `rusqlite::Connection` and provides typed insert/lookup/list helpers for
//! both record kinds. Schema creation is an explicit, idempotent step
//! ([`Database::migrate`]) run once at deployment time rather than a hidden
//! side effect of opening the store.

pub mod channels;
pub mod config;
pub mod database;
pub mod migrations;
pub mod models;
pub mod revisions;

mod error;

pub use config::StoreConfig;
pub use database::Database;
pub use error::StoreError;
pub use models::*;
