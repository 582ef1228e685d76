//! Sales dashboard: transaction table, date and text filtering, demo charts,
//! light/dark theme and PDF/CSV export, built on egui.
//!
//! - [`backend`] holds configuration, persistence and all domain logic, with
//!   no dependency on egui.
//! - [`ui`] draws the dashboard and turns widget interaction into
//!   [`backend::domain::DashboardCommand`]s.

pub mod backend;
pub mod ui;
