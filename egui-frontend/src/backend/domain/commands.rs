//! Commands the UI sends to the dashboard and what came of them.
//!
//! Widgets never touch services directly: each interaction becomes one
//! `DashboardCommand`, dispatched through
//! [`Dashboard::dispatch`](super::dashboard::Dashboard::dispatch).

use shared::{ChartKind, ChartMetric, ChartPeriod, ThemeMode, Transaction};
use thiserror::Error;

use super::export_service::ExportSummary;
use super::models::transaction::{TransactionForm, TransactionValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// Submit of the add-transaction form
    AddTransaction(TransactionForm),
    /// Filter button with the raw contents of both date inputs
    ApplyDateFilter { start: String, end: String },
    ClearDateFilter,
    /// Every edit of the search box
    Search(String),
    SelectPeriod(ChartPeriod),
    SelectMetric(ChartMetric),
    SelectKind(ChartKind),
    ToggleTheme,
    ExportPdf,
    ExportCsv,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    TransactionAdded(Transaction),
    /// Number of transactions left after the date filter
    Filtered(usize),
    SearchUpdated,
    ChartRedrawn,
    ThemeChanged(ThemeMode),
    Exported(ExportSummary),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] TransactionValidationError),
    #[error("Could not save: {0}")]
    Storage(anyhow::Error),
    #[error("Export failed: {0}")]
    Export(anyhow::Error),
}
