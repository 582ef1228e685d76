//! # App Coordinator Module
//!
//! The main update loop.
//!
//! ## Application Flow:
//! 1. Apply the current theme to the context
//! 2. Lay out header, side panel (inputs) and central panel (chart, table)
//! 3. Dispatch the commands raised while laying out
//!
//! Commands are dispatched after layout, so a change shows up on the next
//! frame; a repaint is requested whenever anything was dispatched.

use eframe::egui;

use crate::ui::app_state::SalesDashboardApp;
use crate::ui::components::{
    apply_theme, draw_add_transaction_form, draw_chart_section, draw_date_filter, draw_header, draw_search_box,
    render_transaction_table, Theme,
};

impl eframe::App for SalesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mode = self.dashboard.theme_mode();
        apply_theme(ctx, mode);
        let theme = Theme::for_mode(mode);

        let mut commands = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            draw_header(ui, self.dashboard.theme_toggle_label(), &mut commands);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            match &self.ui.status {
                Some(status) if status.is_error => {
                    ui.colored_label(theme.error_text, &status.text);
                }
                Some(status) => {
                    ui.colored_label(theme.success_text, &status.text);
                }
                None => {
                    ui.label(format!(
                        "{} transactions recorded",
                        self.dashboard.all_transactions().len()
                    ));
                }
            }
        });

        egui::SidePanel::left("inputs").resizable(false).min_width(260.0).show(ctx, |ui| {
            ui.add_space(8.0);
            draw_add_transaction_form(ui, &mut self.form, &mut commands);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Performance");
                draw_chart_section(
                    ui,
                    self.dashboard.chart_selection(),
                    self.dashboard.chart_surface(),
                    &mut commands,
                );

                ui.separator();
                ui.heading("Transactions");
                draw_date_filter(ui, &mut self.form, &mut commands);
                draw_search_box(ui, &mut self.form, &mut commands);
                ui.add_space(6.0);
                render_transaction_table(ui, &self.dashboard.visible_rows(), theme);
            });
        });

        if !commands.is_empty() {
            for command in commands {
                self.queue(command);
            }
            self.process_pending();
            ctx.request_repaint();
        }
    }
}
