//! End-to-end dashboard behaviour driven through commands, with a real file
//! store in a temp directory and a chart surface that records what it holds.

use anyhow::Result;
use chrono::NaiveDate;
use sales_dashboard_egui::backend::config::DashboardConfig;
use sales_dashboard_egui::backend::domain::chart_service::{ChartSpec, ChartSurface};
use sales_dashboard_egui::backend::domain::{
    CommandOutcome, Dashboard, DashboardCommand, DashboardError, TransactionForm,
};
use sales_dashboard_egui::backend::storage::{
    DashboardStore, FileKeyValueStore, KeyValueStore, TRANSACTIONS_BACKUP_KEY, TRANSACTIONS_KEY,
};
use sales_dashboard_egui::backend::Backend;
use shared::{ChartKind, ChartMetric, ChartPeriod, ThemeMode, Transaction};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingSurface {
    next_id: usize,
    live: Vec<(usize, ChartSpec)>,
    created: usize,
}

impl ChartSurface for RecordingSurface {
    type Handle = usize;

    fn create(&mut self, spec: &ChartSpec) -> usize {
        self.next_id += 1;
        self.created += 1;
        self.live.push((self.next_id, spec.clone()));
        self.next_id
    }

    fn destroy(&mut self, handle: usize) {
        self.live.retain(|(id, _)| *id != handle);
    }
}

struct TestEnvironment {
    _temp_dir: TempDir,
    config: DashboardConfig,
}

impl TestEnvironment {
    fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config = DashboardConfig::rooted_at(temp_dir.path());
        Ok(Self { _temp_dir: temp_dir, config })
    }

    fn backend(&self) -> Result<Backend> {
        Backend::new(self.config.clone())
    }

    fn dashboard(&self) -> Result<Dashboard<RecordingSurface>> {
        Ok(Dashboard::new(&self.backend()?, RecordingSurface::default()))
    }

    /// Read the stored list straight from disk, bypassing the dashboard
    fn stored_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        let store = FileKeyValueStore::new(&self.config.data_directory)?;
        DashboardStore::new(Arc::new(store)).load_transactions()
    }
}

fn customers(transactions: &[Transaction]) -> Vec<&str> {
    transactions.iter().map(|t| t.customer.as_str()).collect()
}

#[test]
fn seed_list_filters_to_single_day() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;
    assert_eq!(dashboard.all_transactions().len(), 3);

    let outcome = dashboard
        .dispatch(DashboardCommand::ApplyDateFilter {
            start: "2025-07-18".to_string(),
            end: "2025-07-18".to_string(),
        })
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Filtered(2));
    assert_eq!(customers(dashboard.filtered_transactions()), vec!["Jane Smith", "Ali Khan"]);
    assert_eq!(dashboard.visible_rows().len(), 2);
    Ok(())
}

#[test]
fn blank_bounds_leave_list_unfiltered() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;

    dashboard
        .dispatch(DashboardCommand::ApplyDateFilter {
            start: "2025-07-19".to_string(),
            end: String::new(),
        })
        .unwrap();

    assert_eq!(dashboard.filtered_transactions(), dashboard.all_transactions());
    Ok(())
}

#[test]
fn added_transaction_is_persisted_at_the_end() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;

    let outcome = dashboard
        .dispatch(DashboardCommand::AddTransaction(TransactionForm::new("2025-07-20", "X", "Y", "50")))
        .unwrap();

    let expected = Transaction::new(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(), "X", "Y", 50.0);
    assert_eq!(outcome, CommandOutcome::TransactionAdded(expected.clone()));

    let stored = env.stored_transactions()?.unwrap_or_default();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored.last(), Some(&expected));

    // A fresh session sees the same list
    let reopened = env.dashboard()?;
    assert_eq!(reopened.all_transactions(), stored.as_slice());
    Ok(())
}

#[test]
fn unreadable_stored_list_survives_the_next_add() -> Result<()> {
    let env = TestEnvironment::new()?;
    let original = r#"[{"date":"2025-06-01","customer":"Real","item":"Desk","amount":null}]"#;
    FileKeyValueStore::new(&env.config.data_directory)?.set(TRANSACTIONS_KEY, original)?;

    let mut dashboard = env.dashboard()?;
    assert_eq!(customers(dashboard.all_transactions()), vec!["John Doe", "Jane Smith", "Ali Khan"]);
    dashboard
        .dispatch(DashboardCommand::AddTransaction(TransactionForm::new("2025-07-20", "X", "Y", "50")))
        .unwrap();

    let raw = FileKeyValueStore::new(&env.config.data_directory)?;
    assert_eq!(raw.get(TRANSACTIONS_BACKUP_KEY)?.as_deref(), Some(original));
    assert_eq!(env.stored_transactions()?.map(|list| list.len()), Some(4));
    Ok(())
}

#[test]
fn adding_resets_the_date_filter() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;

    dashboard
        .dispatch(DashboardCommand::ApplyDateFilter {
            start: "2025-07-19".to_string(),
            end: "2025-07-19".to_string(),
        })
        .unwrap();
    assert_eq!(dashboard.filtered_transactions().len(), 1);

    dashboard
        .dispatch(DashboardCommand::AddTransaction(TransactionForm::new("2025-08-01", "Zoe", "Mouse", "25.5")))
        .unwrap();

    assert_eq!(dashboard.date_range(), (None, None));
    assert_eq!(dashboard.filtered_transactions().len(), 4);
    assert_eq!(dashboard.visible_rows().last().map(|row| row.amount.as_str()), Some("R25.5"));
    Ok(())
}

#[test]
fn invalid_input_changes_nothing() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;

    let result = dashboard.dispatch(DashboardCommand::AddTransaction(TransactionForm::new(
        "2025-07-20",
        "X",
        "Y",
        "not a number",
    )));
    assert!(matches!(result, Err(DashboardError::Validation(_))));

    let result = dashboard.dispatch(DashboardCommand::ApplyDateFilter {
        start: "yesterday".to_string(),
        end: "2025-07-19".to_string(),
    });
    assert!(matches!(result, Err(DashboardError::Validation(_))));

    assert_eq!(dashboard.all_transactions().len(), 3);
    assert_eq!(dashboard.date_range(), (None, None));
    assert_eq!(env.stored_transactions()?, None);
    Ok(())
}

#[test]
fn search_survives_rerender_but_not_export() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;

    dashboard.dispatch(DashboardCommand::Search("khan".to_string())).unwrap();
    assert_eq!(dashboard.visible_rows().len(), 1);

    dashboard
        .dispatch(DashboardCommand::AddTransaction(TransactionForm::new("2025-07-21", "Sara Khan", "Monitor", "300")))
        .unwrap();
    let visible: Vec<&str> = dashboard.visible_rows().iter().map(|row| row.customer.as_str()).collect();
    assert_eq!(visible, vec!["Ali Khan", "Sara Khan"]);

    let outcome = dashboard.dispatch(DashboardCommand::ExportCsv).unwrap();
    let CommandOutcome::Exported(summary) = outcome else {
        panic!("expected an export outcome");
    };
    assert_eq!(summary.row_count, 4);
    assert_eq!(fs::read_to_string(&summary.path)?.lines().count(), 5);
    Ok(())
}

#[test]
fn pdf_export_uses_date_filtered_list() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;

    dashboard
        .dispatch(DashboardCommand::ApplyDateFilter {
            start: "2025-07-18".to_string(),
            end: "2025-07-18".to_string(),
        })
        .unwrap();
    let outcome = dashboard.dispatch(DashboardCommand::ExportPdf).unwrap();

    let CommandOutcome::Exported(summary) = outcome else {
        panic!("expected an export outcome");
    };
    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.path, env.config.export_directory.join("transactions.pdf"));
    assert!(fs::read(&summary.path)?.starts_with(b"%PDF"));
    Ok(())
}

#[test]
fn chart_changes_keep_one_live_chart() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;
    assert_eq!(dashboard.chart_surface().live.len(), 1);

    dashboard.dispatch(DashboardCommand::SelectPeriod(ChartPeriod::Quarterly)).unwrap();
    dashboard.dispatch(DashboardCommand::SelectMetric(ChartMetric::Profit)).unwrap();
    dashboard.dispatch(DashboardCommand::SelectKind(ChartKind::Bar)).unwrap();

    let surface = dashboard.chart_surface();
    assert_eq!(surface.created, 4);
    assert_eq!(surface.live.len(), 1);

    let spec = &surface.live[0].1;
    assert_eq!(spec.labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    assert_eq!(spec.values, vec![1890.0, 2835.0, 3075.0, 2625.0]);
    assert_eq!(spec.kind(), ChartKind::Bar);
    assert_eq!(spec.series_label, "Profit");
    Ok(())
}

#[test]
fn theme_toggle_round_trips_and_persists() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut dashboard = env.dashboard()?;
    assert_eq!(dashboard.theme_mode(), ThemeMode::Light);
    let label = dashboard.theme_toggle_label();

    let outcome = dashboard.dispatch(DashboardCommand::ToggleTheme).unwrap();
    assert_eq!(outcome, CommandOutcome::ThemeChanged(ThemeMode::Dark));
    assert_eq!(env.dashboard()?.theme_mode(), ThemeMode::Dark);

    dashboard.dispatch(DashboardCommand::ToggleTheme).unwrap();
    assert_eq!(dashboard.theme_mode(), ThemeMode::Light);
    assert_eq!(dashboard.theme_toggle_label(), label);
    assert_eq!(env.dashboard()?.theme_mode(), ThemeMode::Light);
    Ok(())
}

#[test]
fn configured_default_chart_and_currency() -> Result<()> {
    let env = TestEnvironment::new()?;
    let mut config = env.config.clone();
    config.currency_symbol = "$".to_string();
    config.default_chart.period = ChartPeriod::Yearly;

    let dashboard = Dashboard::new(&Backend::new(config)?, RecordingSurface::default());

    assert_eq!(dashboard.chart_selection().period, ChartPeriod::Yearly);
    assert_eq!(dashboard.visible_rows()[1].amount, "$700");
    Ok(())
}
