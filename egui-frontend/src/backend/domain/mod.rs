//! # Domain Module
//!
//! Business logic of the dashboard, independent of egui.

pub mod chart_service;
pub mod commands;
pub mod dashboard;
pub mod export_service;
pub mod models;
pub mod theme_service;
pub mod transaction_service;
pub mod transaction_table;

pub use chart_service::{ChartPresenter, ChartSpec, ChartSurface};
pub use commands::{CommandOutcome, DashboardCommand, DashboardError};
pub use dashboard::Dashboard;
pub use export_service::{ExportService, ExportSummary};
pub use models::transaction::{TransactionForm, TransactionValidationError};
pub use theme_service::ThemeService;
pub use transaction_service::TransactionService;
