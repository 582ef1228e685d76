//! # Storage Traits
//!
//! The dashboard only ever needs a flat string-to-string store, the same
//! shape as a browser's local storage. Typed access lives in
//! [`DashboardStore`](super::DashboardStore) on top of this trait.

use anyhow::Result;

/// Flat key-value persistence
///
/// Writes are synchronous: once `set` returns `Ok`, a subsequent `get` (on
/// this or a freshly opened store over the same location) sees the value.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
