//! Session-scoped key/value substrate the persistence store writes through.
//!
//! Values are opaque strings. There is no multi-key atomicity: callers that
//! touch several keys must order and compensate their writes themselves.

mod memory;
mod sqlite;

use anyhow::Result;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

pub const SAVED_LOCATIONS_KEY: &str = "saved-locations";
pub const REVIEWS_KEY: &str = "place-reviews-by-location";
pub const HELPFUL_KEY: &str = "helpful-reviews";
pub const CURRENT_USER_KEY: &str = "current-user";

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`. On error the previous value is kept.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
