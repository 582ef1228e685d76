use eframe::egui;

use crate::backend::domain::DashboardCommand;

/// Title bar with the theme toggle and export buttons
pub fn draw_header(ui: &mut egui::Ui, theme_label: &str, commands: &mut Vec<DashboardCommand>) {
    ui.horizontal(|ui| {
        ui.heading("📊 Sales Dashboard");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export CSV").clicked() {
                commands.push(DashboardCommand::ExportCsv);
            }
            if ui.button("Export PDF").clicked() {
                commands.push(DashboardCommand::ExportPdf);
            }
            if ui.button(theme_label).clicked() {
                commands.push(DashboardCommand::ToggleTheme);
            }
        });
    });
}
