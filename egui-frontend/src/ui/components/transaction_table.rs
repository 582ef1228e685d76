use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::backend::domain::transaction_table::{TableRow, TABLE_HEADERS};
use crate::ui::components::theme::Theme;

const HEADER_HEIGHT: f32 = 28.0;
const ROW_HEIGHT: f32 = 24.0;

/// Render the transaction table from already searched rows
pub fn render_transaction_table(ui: &mut egui::Ui, rows: &[&TableRow], theme: &Theme) {
    if rows.is_empty() {
        ui.label("No transactions match the current filters");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(110.0))  // DATE
        .column(Column::initial(180.0))  // CUSTOMER
        .column(Column::initial(180.0))  // ITEM
        .column(Column::remainder())     // AMOUNT
        .header(HEADER_HEIGHT, |mut header| {
            for title in TABLE_HEADERS {
                header.col(|ui| {
                    let rect = ui.max_rect();
                    ui.painter().rect_filled(rect, 0.0, theme.header_background);
                    ui.add_space(6.0);
                    ui.label(egui::RichText::new(title).strong().color(theme.header_text));
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    for cell in row.cells() {
                        table_row.col(|ui| {
                            ui.add_space(6.0);
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
