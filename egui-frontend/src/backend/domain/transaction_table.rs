//! # Transaction Table Projection
//!
//! Turns a list of transactions into display rows for the table view and
//! implements the free-text search, which works on the rendered text rather
//! than on the underlying records.

use shared::Transaction;

/// Column headers, shared by the on-screen table and the exports
pub const TABLE_HEADERS: [&str; 4] = ["Date", "Customer", "Item", "Amount"];

/// One rendered row of the transaction table
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub customer: String,
    pub item: String,
    pub amount: String,
}

impl TableRow {
    pub fn from_transaction(transaction: &Transaction, currency_symbol: &str) -> Self {
        Self {
            date: transaction.iso_date(),
            customer: transaction.customer.clone(),
            item: transaction.item.clone(),
            amount: format_amount(transaction.amount, currency_symbol),
        }
    }

    pub fn cells(&self) -> [&str; 4] {
        [&self.date, &self.customer, &self.item, &self.amount]
    }

    /// Case-insensitive substring match over the whole row text.
    /// An empty query matches every row.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.cells().concat().to_lowercase().contains(&query)
    }
}

/// Currency marker followed by the shortest decimal that round-trips:
/// `120.0` renders as `R120`, `85.5` as `R85.5`
pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{}{}", currency_symbol, amount)
}

/// Rebuild every row from `transactions`, in order
pub fn render(transactions: &[Transaction], currency_symbol: &str) -> Vec<TableRow> {
    transactions
        .iter()
        .map(|t| TableRow::from_transaction(t, currency_symbol))
        .collect()
}

/// Rows still shown once the search `query` is applied
pub fn visible_rows<'a>(rows: &'a [TableRow], query: &str) -> Vec<&'a TableRow> {
    rows.iter().filter(|row| row.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::transaction_service::seed_transactions;

    #[test]
    fn test_render_one_row_per_transaction() {
        let rows = render(&seed_transactions(), "R");

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            TableRow {
                date: "2025-07-19".to_string(),
                customer: "John Doe".to_string(),
                item: "Headphones".to_string(),
                amount: "R120".to_string(),
            }
        );
        assert_eq!(rows[2].amount, "R85");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(120.0, "R"), "R120");
        assert_eq!(format_amount(85.5, "R"), "R85.5");
        assert_eq!(format_amount(0.1 + 0.2, "$"), "$0.30000000000000004");
        assert_eq!(format_amount(0.0, "R"), "R0");
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_columns() {
        let rows = render(&seed_transactions(), "R");

        let hits: Vec<&str> = visible_rows(&rows, "JANE").iter().map(|r| r.customer.as_str()).collect();
        assert_eq!(hits, vec!["Jane Smith"]);

        let hits: Vec<&str> = visible_rows(&rows, "07-18").iter().map(|r| r.customer.as_str()).collect();
        assert_eq!(hits, vec!["Jane Smith", "Ali Khan"]);

        assert_eq!(visible_rows(&rows, "r700").len(), 1);
        assert_eq!(visible_rows(&rows, "").len(), 3);
        assert!(visible_rows(&rows, "tablet").is_empty());
    }

    #[test]
    fn test_search_spans_cell_boundaries() {
        // The row text is the cells joined without separators
        let rows = render(&seed_transactions(), "R");
        assert_eq!(visible_rows(&rows, "doeheadphones").len(), 1);
    }
}
