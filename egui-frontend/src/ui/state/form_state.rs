//! # Form State Module
//!
//! Text typed into the dashboard's inputs. Nothing here is validated; the
//! raw strings travel inside commands and are parsed by the domain layer.

use crate::backend::domain::TransactionForm;

#[derive(Debug, Default)]
pub struct FormState {
    /// Add-transaction form fields
    pub draft: TransactionForm,
    /// Date range inputs, blank means unbounded
    pub filter_start: String,
    pub filter_end: String,
    /// Search box contents
    pub search: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the add-transaction form after a successful submit
    pub fn reset_draft(&mut self) {
        self.draft = TransactionForm::default();
    }
}
