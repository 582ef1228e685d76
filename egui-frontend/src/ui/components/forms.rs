//! # Form Components
//!
//! Input panels of the dashboard: add-transaction form, date-range filter
//! and the search box. Each one only edits [`FormState`] and raises
//! commands; none of them validates input.

use eframe::egui;

use crate::backend::domain::DashboardCommand;
use crate::ui::state::FormState;

const DATE_HINT: &str = "YYYY-MM-DD";

pub fn draw_add_transaction_form(ui: &mut egui::Ui, form: &mut FormState, commands: &mut Vec<DashboardCommand>) {
    ui.heading("Add Transaction");

    egui::Grid::new("add_transaction_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Date");
            ui.add(egui::TextEdit::singleline(&mut form.draft.date).hint_text(DATE_HINT));
            ui.end_row();

            ui.label("Customer");
            ui.text_edit_singleline(&mut form.draft.customer);
            ui.end_row();

            ui.label("Item");
            ui.text_edit_singleline(&mut form.draft.item);
            ui.end_row();

            ui.label("Amount");
            let amount = ui.text_edit_singleline(&mut form.draft.amount);
            ui.end_row();

            let submitted_with_enter = amount.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.label("");
            if ui.button("Add").clicked() || submitted_with_enter {
                commands.push(DashboardCommand::AddTransaction(form.draft.clone()));
            }
            ui.end_row();
        });
}

pub fn draw_date_filter(ui: &mut egui::Ui, form: &mut FormState, commands: &mut Vec<DashboardCommand>) {
    ui.horizontal(|ui| {
        ui.label("From");
        ui.add(egui::TextEdit::singleline(&mut form.filter_start).hint_text(DATE_HINT).desired_width(100.0));
        ui.label("To");
        ui.add(egui::TextEdit::singleline(&mut form.filter_end).hint_text(DATE_HINT).desired_width(100.0));

        if ui.button("Filter").clicked() {
            commands.push(DashboardCommand::ApplyDateFilter {
                start: form.filter_start.clone(),
                end: form.filter_end.clone(),
            });
        }
        if ui.button("Clear").clicked() {
            form.filter_start.clear();
            form.filter_end.clear();
            commands.push(DashboardCommand::ClearDateFilter);
        }
    });
}

pub fn draw_search_box(ui: &mut egui::Ui, form: &mut FormState, commands: &mut Vec<DashboardCommand>) {
    let response = ui.add(
        egui::TextEdit::singleline(&mut form.search)
            .hint_text("Search transactions...")
            .desired_width(240.0),
    );
    if response.changed() {
        commands.push(DashboardCommand::Search(form.search.clone()));
    }
}
