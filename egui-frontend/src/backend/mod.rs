//! # Backend Module
//!
//! Contains all non-UI logic for the sales dashboard.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (egui panels, chart surface)
//!     ↓  DashboardCommand
//! Domain Layer (Dashboard session, services)
//!     ↓
//! Storage Layer (key-value store)
//! ```
//!
//! `Backend` is the wiring point: it resolves configuration and opens the
//! store that every service shares.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::config::DashboardConfig;
use crate::backend::storage::{DashboardStore, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

pub use domain::*;

pub struct Backend {
    config: DashboardConfig,
    store: DashboardStore,
}

impl Backend {
    /// Backend persisting to `config.data_directory`
    pub fn new(config: DashboardConfig) -> Result<Self> {
        info!("Opening data directory {}", config.data_directory.display());
        let store = FileKeyValueStore::new(&config.data_directory)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Load the user's configuration and open its data directory.
    ///
    /// A broken config file is logged and replaced by defaults for this run;
    /// an unusable data directory is fatal.
    pub fn from_default_config() -> Result<Self> {
        let config = DashboardConfig::load_or_create_default().unwrap_or_else(|e| {
            warn!("Using default configuration: {}", e);
            DashboardConfig::default()
        });
        Self::new(config)
    }

    /// Backend whose data lives only as long as the process
    pub fn in_memory(config: DashboardConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryKeyValueStore::new()))
    }

    pub fn with_store(config: DashboardConfig, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            config,
            store: DashboardStore::new(store),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> DashboardStore {
        self.store.clone()
    }
}
