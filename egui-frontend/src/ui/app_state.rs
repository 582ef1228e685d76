//! # App State Module
//!
//! The application state object for one dashboard session.
//!
//! ## Key Types:
//! - `SalesDashboardApp` - dashboard session, form inputs, status line and
//!   the queue of commands raised during the current frame
//!
//! ## Command Flow:
//! Panels never call into the backend while they are being drawn. They push
//! a `DashboardCommand` with `queue()`, and the coordinator calls
//! `process_pending()` once the frame is laid out. Results land in the
//! status line.

use log::{error, info};

use crate::backend::domain::{CommandOutcome, Dashboard, DashboardCommand};
use crate::backend::Backend;
use crate::ui::components::chart_renderer::EguiChartSurface;
use crate::ui::state::{FormState, UIState};

pub struct SalesDashboardApp {
    pub dashboard: Dashboard<EguiChartSurface>,
    pub form: FormState,
    pub ui: UIState,
    pending: Vec<DashboardCommand>,
}

impl SalesDashboardApp {
    pub fn new(backend: Backend) -> Self {
        let dashboard = Dashboard::new(&backend, EguiChartSurface::new());
        info!(
            "Dashboard ready with {} transactions in {} mode",
            dashboard.all_transactions().len(),
            dashboard.theme_mode()
        );

        Self {
            dashboard,
            form: FormState::new(),
            ui: UIState::new(),
            pending: Vec::new(),
        }
    }

    /// Defer `command` until the end of the frame
    pub fn queue(&mut self, command: DashboardCommand) {
        self.pending.push(command);
    }

    pub fn pending_commands(&self) -> &[DashboardCommand] {
        &self.pending
    }

    /// Dispatch queued commands in the order they were raised
    pub fn process_pending(&mut self) {
        for command in std::mem::take(&mut self.pending) {
            self.execute(command);
        }
    }

    fn execute(&mut self, command: DashboardCommand) {
        match self.dashboard.dispatch(command) {
            Ok(CommandOutcome::TransactionAdded(transaction)) => {
                self.form.reset_draft();
                self.ui.set_success(format!(
                    "Added {} for {}",
                    transaction.item, transaction.customer
                ));
            }
            Ok(CommandOutcome::Filtered(count)) => {
                self.ui.set_success(format!("Showing {} transactions", count));
            }
            Ok(CommandOutcome::Exported(summary)) => {
                self.ui.set_success(format!(
                    "Exported {} rows to {}",
                    summary.row_count,
                    summary.path.display()
                ));
            }
            Ok(CommandOutcome::SearchUpdated)
            | Ok(CommandOutcome::ChartRedrawn)
            | Ok(CommandOutcome::ThemeChanged(_)) => {}
            Err(e) => {
                error!("Command failed: {}", e);
                self.ui.set_error(e.to_string());
            }
        }
    }
}
