//! # Dashboard Session
//!
//! The state of one running dashboard and the single entry point for
//! changing it.
//!
//! ## Responsibilities:
//! - Own the transaction repository, theme, chart presenter and exporter
//! - Track the active date range and the rows it produces
//! - Keep the search query and re-apply it to every fresh render
//! - Turn each [`DashboardCommand`] into service calls
//!
//! The session is generic over the chart surface so it can be driven
//! headless in tests and by egui in the app.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{ChartSelection, ThemeMode, Transaction};

use crate::backend::domain::chart_service::{ChartPresenter, ChartSurface};
use crate::backend::domain::commands::{CommandOutcome, DashboardCommand, DashboardError};
use crate::backend::domain::export_service::ExportService;
use crate::backend::domain::models::transaction::parse_date_bound;
use crate::backend::domain::theme_service::ThemeService;
use crate::backend::domain::transaction_service::TransactionService;
use crate::backend::domain::transaction_table::{self, TableRow};
use crate::backend::Backend;

pub struct Dashboard<S: ChartSurface> {
    transactions: TransactionService,
    theme: ThemeService,
    charts: ChartPresenter<S>,
    exporter: ExportService,
    currency_symbol: String,
    date_range: (Option<NaiveDate>, Option<NaiveDate>),
    /// Date-filtered transactions, the source of both the table and exports
    filtered: Vec<Transaction>,
    rows: Vec<TableRow>,
    search_query: String,
}

impl<S: ChartSurface> Dashboard<S> {
    /// Load persisted state and draw the configured default chart
    pub fn new(backend: &Backend, surface: S) -> Self {
        let store = backend.store();
        let config = backend.config();

        let transactions = TransactionService::load(store.clone());
        let theme = ThemeService::init(store);
        let mut charts = ChartPresenter::new(surface);
        charts.show(config.default_chart);

        let mut dashboard = Self {
            filtered: transactions.transactions().to_vec(),
            transactions,
            theme,
            charts,
            exporter: ExportService::new(config),
            currency_symbol: config.currency_symbol.clone(),
            date_range: (None, None),
            rows: Vec::new(),
            search_query: String::new(),
        };
        dashboard.refresh_rows();
        dashboard
    }

    pub fn dispatch(&mut self, command: DashboardCommand) -> Result<CommandOutcome, DashboardError> {
        match command {
            DashboardCommand::AddTransaction(form) => {
                let transaction = form.parse()?;
                self.transactions
                    .append(transaction.clone())
                    .map_err(DashboardError::Storage)?;
                // A new record always brings the full list back into view
                self.date_range = (None, None);
                self.refilter();
                Ok(CommandOutcome::TransactionAdded(transaction))
            }
            DashboardCommand::ApplyDateFilter { start, end } => {
                let start = parse_date_bound(&start)?;
                let end = parse_date_bound(&end)?;
                self.date_range = (start, end);
                self.refilter();
                Ok(CommandOutcome::Filtered(self.filtered.len()))
            }
            DashboardCommand::ClearDateFilter => {
                self.date_range = (None, None);
                self.refilter();
                Ok(CommandOutcome::Filtered(self.filtered.len()))
            }
            DashboardCommand::Search(query) => {
                self.search_query = query;
                Ok(CommandOutcome::SearchUpdated)
            }
            DashboardCommand::SelectPeriod(period) => {
                self.redraw(ChartSelection { period, ..self.charts.selection() })
            }
            DashboardCommand::SelectMetric(metric) => {
                self.redraw(ChartSelection { metric, ..self.charts.selection() })
            }
            DashboardCommand::SelectKind(kind) => {
                self.redraw(ChartSelection { kind, ..self.charts.selection() })
            }
            DashboardCommand::ToggleTheme => {
                let mode = self.theme.toggle().map_err(DashboardError::Storage)?;
                Ok(CommandOutcome::ThemeChanged(mode))
            }
            DashboardCommand::ExportPdf => {
                let summary = self.exporter.export_pdf(&self.filtered).map_err(|e| {
                    warn!("PDF export failed: {}", e);
                    DashboardError::Export(e)
                })?;
                Ok(CommandOutcome::Exported(summary))
            }
            DashboardCommand::ExportCsv => {
                let summary = self.exporter.export_csv(&self.filtered).map_err(|e| {
                    warn!("CSV export failed: {}", e);
                    DashboardError::Export(e)
                })?;
                Ok(CommandOutcome::Exported(summary))
            }
        }
    }

    fn redraw(&mut self, selection: ChartSelection) -> Result<CommandOutcome, DashboardError> {
        self.charts.show(selection);
        Ok(CommandOutcome::ChartRedrawn)
    }

    fn refilter(&mut self) {
        let (start, end) = self.date_range;
        self.filtered = self.transactions.filter_by_date_range(start, end);
        info!("Showing {} of {} transactions", self.filtered.len(), self.transactions.transactions().len());
        self.refresh_rows();
    }

    /// Full table rebuild from the filtered list
    fn refresh_rows(&mut self) {
        self.rows = transaction_table::render(&self.filtered, &self.currency_symbol);
    }

    /// Every stored transaction, insertion order
    pub fn all_transactions(&self) -> &[Transaction] {
        self.transactions.transactions()
    }

    /// Transactions passing the date filter; what an export would contain
    pub fn filtered_transactions(&self) -> &[Transaction] {
        &self.filtered
    }

    /// Rendered rows that also pass the text search
    pub fn visible_rows(&self) -> Vec<&TableRow> {
        transaction_table::visible_rows(&self.rows, &self.search_query)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn date_range(&self) -> (Option<NaiveDate>, Option<NaiveDate>) {
        self.date_range
    }

    pub fn chart_selection(&self) -> ChartSelection {
        self.charts.selection()
    }

    pub fn chart_surface(&self) -> &S {
        self.charts.surface()
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn theme_toggle_label(&self) -> &'static str {
        self.theme.toggle_label()
    }
}
