//! Typed access to the two keys the dashboard persists.

use anyhow::{anyhow, Result};
use log::{debug, warn};
use shared::{ThemeMode, Transaction};
use std::sync::Arc;

use super::traits::KeyValueStore;

pub const TRANSACTIONS_KEY: &str = "transactions";
pub const THEME_KEY: &str = "theme";
/// Where an unreadable `transactions` value is kept before it is replaced
pub const TRANSACTIONS_BACKUP_KEY: &str = "transactions.corrupt";

#[derive(Clone)]
pub struct DashboardStore {
    inner: Arc<dyn KeyValueStore>,
}

impl DashboardStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Persisted transaction list, `None` when nothing was ever saved.
    /// A value that is not a JSON transaction array is an error.
    pub fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        match self.inner.get(TRANSACTIONS_KEY)? {
            Some(raw) => {
                let transactions: Vec<Transaction> = serde_json::from_str(&raw)
                    .map_err(|e| anyhow!("Stored transactions are not valid: {}", e))?;
                debug!("STORE: loaded {} transactions", transactions.len());
                Ok(Some(transactions))
            }
            None => Ok(None),
        }
    }

    /// Replace the persisted list with `transactions`
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(transactions)?;
        self.inner.set(TRANSACTIONS_KEY, &raw)?;
        debug!("STORE: saved {} transactions", transactions.len());
        Ok(())
    }

    /// Copy the raw `transactions` value to [`TRANSACTIONS_BACKUP_KEY`].
    /// Returns whether there was anything to copy.
    pub fn back_up_transactions(&self) -> Result<bool> {
        match self.inner.get(TRANSACTIONS_KEY)? {
            Some(raw) => {
                self.inner.set(TRANSACTIONS_BACKUP_KEY, &raw)?;
                warn!("STORE: kept unreadable transactions under '{}'", TRANSACTIONS_BACKUP_KEY);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persisted theme flag. Only the exact string `"dark"` means dark.
    pub fn load_theme(&self) -> Result<Option<ThemeMode>> {
        Ok(self
            .inner
            .get(THEME_KEY)?
            .map(|raw| ThemeMode::from_dark(raw == ThemeMode::Dark.as_str())))
    }

    pub fn save_theme(&self, mode: ThemeMode) -> Result<()> {
        self.inner.set(THEME_KEY, mode.as_str())
    }
}
