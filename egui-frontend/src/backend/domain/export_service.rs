//! Export service domain logic for the sales dashboard.
//!
//! Writes the currently date-filtered transactions either as a single-table
//! PDF or as CSV. The on-screen text search never affects what is exported.

use anyhow::{anyhow, Result};
use log::{error, info};
use printpdf::{BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point};
use shared::Transaction;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::backend::config::DashboardConfig;
use crate::backend::domain::transaction_table::{self, TableRow, TABLE_HEADERS};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 14.0;
/// Height of a single-line row, header included
const ROW_HEIGHT: f64 = 8.0;
/// Extra height for each wrapped line after the first
const LINE_HEIGHT: f64 = 4.5;
const FONT_SIZE: f64 = 10.0;
/// Left edge of each column, in mm from the page edge
const COLUMN_X: [f64; 4] = [MARGIN, 48.0, 104.0, 160.0];
/// Gap kept between a cell's text and the next column
const CELL_PADDING: f64 = 2.0;
const PT_TO_MM: f64 = 25.4 / 72.0;
/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];
const FALLBACK_WIDTH: u16 = 556;

/// What an export produced
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub row_count: usize,
}

#[derive(Debug, Clone)]
pub struct ExportService {
    currency_symbol: String,
    pdf_path: PathBuf,
    csv_path: PathBuf,
}

impl ExportService {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            pdf_path: config.pdf_export_path(),
            csv_path: config.csv_export_path(),
        }
    }

    /// Write `transactions` to the configured PDF file
    pub fn export_pdf(&self, transactions: &[Transaction]) -> Result<ExportSummary> {
        info!("📄 EXPORT: writing {} transactions to {}", transactions.len(), self.pdf_path.display());

        let bytes = self.render_pdf(transactions)?;
        ensure_parent_exists(&self.pdf_path)?;
        fs::write(&self.pdf_path, bytes).map_err(|e| {
            error!("❌ EXPORT: could not write {}: {}", self.pdf_path.display(), e);
            anyhow!("Could not write {}: {}", self.pdf_path.display(), e)
        })?;

        Ok(ExportSummary {
            path: self.pdf_path.clone(),
            row_count: transactions.len(),
        })
    }

    /// Write `transactions` to the configured CSV file
    pub fn export_csv(&self, transactions: &[Transaction]) -> Result<ExportSummary> {
        info!("📄 EXPORT: writing {} transactions to {}", transactions.len(), self.csv_path.display());

        ensure_parent_exists(&self.csv_path)?;
        let mut writer = csv::Writer::from_path(&self.csv_path)?;
        writer.write_record(TABLE_HEADERS)?;
        for row in transaction_table::render(transactions, &self.currency_symbol) {
            writer.write_record(row.cells())?;
        }
        writer.flush()?;

        Ok(ExportSummary {
            path: self.csv_path.clone(),
            row_count: transactions.len(),
        })
    }

    /// Render the PDF document in memory
    pub fn render_pdf(&self, transactions: &[Transaction]) -> Result<Vec<u8>> {
        let rows: Vec<PdfRow> = transaction_table::render(transactions, &self.currency_symbol)
            .iter()
            .map(PdfRow::layout)
            .collect();

        let (doc, first_page, first_layer) =
            PdfDocument::new("Transactions", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Table");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Could not load PDF font: {:?}", e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Could not load PDF font: {:?}", e))?;

        let pages = paginate(&rows, body_height());
        for (index, page_rows) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Table");
                doc.get_page(page).get_layer(layer)
            };
            draw_table_page(&layer, page_rows, &regular, &bold);
        }

        save_to_bytes(doc)
    }
}

fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn save_to_bytes(doc: PdfDocumentReference) -> Result<Vec<u8>> {
    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| anyhow!("Could not render PDF: {:?}", e))?;
    writer
        .into_inner()
        .map_err(|e| anyhow!("Could not flush PDF buffer: {}", e))
}

/// A table row with every cell wrapped to its column width
#[derive(Debug, Clone, PartialEq)]
struct PdfRow {
    lines: Vec<Vec<String>>,
    height: f64,
}

impl PdfRow {
    fn layout(row: &TableRow) -> Self {
        let widths = column_widths();
        let lines: Vec<Vec<String>> = row
            .cells()
            .iter()
            .zip(widths)
            .map(|(cell, width)| wrap_text(cell, width))
            .collect();
        let line_count = lines.iter().map(Vec::len).max().unwrap_or(1).max(1);

        Self {
            lines,
            height: ROW_HEIGHT + (line_count - 1) as f64 * LINE_HEIGHT,
        }
    }
}

/// Usable text width of each column, in mm
fn column_widths() -> [f64; 4] {
    let mut widths = [0.0; 4];
    for (i, x) in COLUMN_X.iter().enumerate() {
        let right = COLUMN_X.get(i + 1).map_or(PAGE_WIDTH - MARGIN, |next| next - CELL_PADDING);
        widths[i] = right - x;
    }
    widths
}

/// Printed width of `text` in Helvetica at the table font size, in mm
fn text_width(text: &str) -> f64 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as usize;
            if (32..=126).contains(&code) {
                u32::from(HELVETICA_WIDTHS[code - 32])
            } else {
                u32::from(FALLBACK_WIDTH)
            }
        })
        .sum();
    f64::from(units) / 1000.0 * FONT_SIZE * PT_TO_MM
}

/// Break `text` into lines no wider than `max_width` mm, splitting on
/// whitespace and inside words that are too long on their own
fn wrap_text(text: &str, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate) <= max_width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            current.push(c);
            if text_width(&current) > max_width && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::replace(&mut current, c.to_string()));
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Vertical space below the header rule available for body rows
fn body_height() -> f64 {
    header_rule_y() - MARGIN
}

fn header_rule_y() -> f64 {
    PAGE_HEIGHT - MARGIN - ROW_HEIGHT - 0.5
}

/// Split rows into pages that each fit `available` mm. A row taller than a
/// whole page still gets a page of its own. An empty table gets one page so
/// the header is always printed.
fn paginate(rows: &[PdfRow], available: f64) -> Vec<&[PdfRow]> {
    let mut pages = Vec::new();
    let mut start = 0;
    let mut used = 0.0;

    for (i, row) in rows.iter().enumerate() {
        if i > start && used + row.height > available {
            pages.push(&rows[start..i]);
            start = i;
            used = 0.0;
        }
        used += row.height;
    }
    if start < rows.len() || pages.is_empty() {
        pages.push(&rows[start..]);
    }
    pages
}

fn draw_table_page(layer: &PdfLayerReference, rows: &[PdfRow], regular: &IndirectFontRef, bold: &IndirectFontRef) {
    let mut rule_y = header_rule_y();

    for (x, header) in COLUMN_X.iter().zip(TABLE_HEADERS) {
        layer.use_text(header, FONT_SIZE, Mm(*x), Mm(rule_y + 2.5), bold);
    }
    draw_rule(layer, rule_y, 1.0);

    for row in rows {
        let first_baseline = rule_y - ROW_HEIGHT + 2.5;
        for (x, cell_lines) in COLUMN_X.iter().zip(&row.lines) {
            for (n, line) in cell_lines.iter().enumerate() {
                let baseline = first_baseline - n as f64 * LINE_HEIGHT;
                layer.use_text(line.as_str(), FONT_SIZE, Mm(*x), Mm(baseline), regular);
            }
        }
        rule_y -= row.height;
        draw_rule(layer, rule_y, 0.3);
    }
}

fn draw_rule(layer: &PdfLayerReference, y: f64, thickness: f64) {
    layer.set_outline_thickness(thickness);
    let rule = Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(rule);
}
