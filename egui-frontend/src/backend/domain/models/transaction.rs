//! Raw form input for a new sale and its conversion into a [`Transaction`].

use chrono::NaiveDate;
use shared::Transaction;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Form field names, used in validation messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Customer,
    Item,
    Amount,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FormField::Date => "date",
            FormField::Customer => "customer",
            FormField::Item => "item",
            FormField::Amount => "amount",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransactionValidationError {
    #[error("The {0} field is required")]
    MissingField(FormField),
    #[error("'{0}' is not a date in YYYY-MM-DD format")]
    InvalidDate(String),
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("Amount cannot be negative (got {0})")]
    NegativeAmount(f64),
}

/// Text exactly as typed into the add-transaction form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionForm {
    pub date: String,
    pub customer: String,
    pub item: String,
    pub amount: String,
}

impl TransactionForm {
    pub fn new(
        date: impl Into<String>,
        customer: impl Into<String>,
        item: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            customer: customer.into(),
            item: item.into(),
            amount: amount.into(),
        }
    }

    /// Validate every field and build the transaction
    pub fn parse(&self) -> Result<Transaction, TransactionValidationError> {
        let date = required(&self.date, FormField::Date)?;
        let customer = required(&self.customer, FormField::Customer)?;
        let item = required(&self.item, FormField::Item)?;
        let amount = required(&self.amount, FormField::Amount)?;

        let date = parse_date(date)?;
        let amount = parse_amount(amount)?;

        Ok(Transaction::new(date, customer, item, amount))
    }
}

fn required(value: &str, field: FormField) -> Result<&str, TransactionValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TransactionValidationError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, TransactionValidationError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| TransactionValidationError::InvalidDate(raw.to_string()))
}

fn parse_amount(raw: &str) -> Result<f64, TransactionValidationError> {
    let amount: f64 = raw
        .parse()
        .map_err(|_| TransactionValidationError::InvalidAmount(raw.to_string()))?;

    if !amount.is_finite() {
        return Err(TransactionValidationError::InvalidAmount(raw.to_string()));
    }
    if amount < 0.0 {
        return Err(TransactionValidationError::NegativeAmount(amount));
    }
    // "-0" parses to negative zero
    Ok(amount.abs())
}

/// Parse one bound of the date-range filter. Blank input means "no bound".
pub fn parse_date_bound(raw: &str) -> Result<Option<NaiveDate>, TransactionValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        parse_date(trimmed).map(Some)
    }
}
