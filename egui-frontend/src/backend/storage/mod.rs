//! # Storage Module
//!
//! Persistence for the dashboard: a flat key-value trait, a file-backed and
//! an in-memory implementation, and the typed adapter the domain layer uses.

pub mod dashboard_store;
pub mod file_store;
pub mod memory_store;
pub mod traits;

pub use dashboard_store::{DashboardStore, THEME_KEY, TRANSACTIONS_BACKUP_KEY, TRANSACTIONS_KEY};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use traits::KeyValueStore;
