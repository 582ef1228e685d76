//! Transaction repository for the sales dashboard.
//!
//! Holds the ordered, append-only list of sales and keeps it in lock-step
//! with the store: a record only becomes visible in memory after the whole
//! list including it has been persisted.
//!
//! A stored list that cannot be read is never silently overwritten: the
//! first append copies it to a backup key before saving the new list.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use shared::Transaction;

use crate::backend::storage::DashboardStore;

/// Transactions shown on first launch, before anything has been saved
pub fn seed_transactions() -> Vec<Transaction> {
    let date = |day| NaiveDate::from_ymd_opt(2025, 7, day).unwrap_or_default();
    vec![
        Transaction::new(date(19), "John Doe", "Headphones", 120.0),
        Transaction::new(date(18), "Jane Smith", "Smartphone", 700.0),
        Transaction::new(date(18), "Ali Khan", "Keyboard", 85.0),
    ]
}

pub struct TransactionService {
    store: DashboardStore,
    transactions: Vec<Transaction>,
    /// The stored value could not be read and has not been backed up yet
    unreadable_stored_list: bool,
}

impl TransactionService {
    /// Load the persisted list, falling back to the seed set when nothing
    /// (or nothing readable) has been stored yet
    pub fn load(store: DashboardStore) -> Self {
        let (transactions, unreadable_stored_list) = match store.load_transactions() {
            Ok(Some(transactions)) => {
                info!("Loaded {} stored transactions", transactions.len());
                (transactions, false)
            }
            Ok(None) => {
                info!("No stored transactions, using demo data");
                (seed_transactions(), false)
            }
            Err(e) => {
                warn!("Could not read stored transactions, using demo data: {}", e);
                (seed_transactions(), true)
            }
        };

        Self {
            store,
            transactions,
            unreadable_stored_list,
        }
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append `transaction` and persist the full list.
    ///
    /// On a storage failure the in-memory list is left unchanged. If the
    /// stored list was unreadable at load time it is backed up first, and a
    /// failed backup refuses the append.
    pub fn append(&mut self, transaction: Transaction) -> Result<()> {
        if self.unreadable_stored_list {
            self.store.back_up_transactions()?;
            self.unreadable_stored_list = false;
        }

        let mut updated = self.transactions.clone();
        updated.push(transaction);

        self.store.save_transactions(&updated)?;
        self.transactions = updated;

        info!("Appended transaction, {} total", self.transactions.len());
        Ok(())
    }

    /// Transactions dated within `[start, end]` inclusive, in original order.
    /// Without both bounds the full list is returned.
    pub fn filter_by_date_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Vec<Transaction> {
        filter_by_date_range(&self.transactions, start, end)
    }
}

/// Free-function form of [`TransactionService::filter_by_date_range`]
pub fn filter_by_date_range(
    transactions: &[Transaction],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Transaction> {
    match (start, end) {
        (Some(start), Some(end)) => transactions
            .iter()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect(),
        _ => transactions.to_vec(),
    }
}
