use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single recorded sale.
///
/// The serialized form matches what the dashboard keeps under the
/// `transactions` storage key: `{"date":"2025-07-19","customer":...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date of the sale, serialized as ISO `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Name of the customer
    pub customer: String,
    /// Label of the item sold
    pub item: String,
    /// Sale amount, always finite and non-negative
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, customer: impl Into<String>, item: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            customer: customer.into(),
            item: item.into(),
            amount,
        }
    }

    /// ISO representation of the date, as shown in the table and exports
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Aggregation granularity of the chart datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartPeriod {
    Monthly,
    Quarterly,
    Yearly,
}

impl ChartPeriod {
    pub const ALL: [ChartPeriod; 3] = [ChartPeriod::Monthly, ChartPeriod::Quarterly, ChartPeriod::Yearly];

    pub fn label(&self) -> &'static str {
        match self {
            ChartPeriod::Monthly => "Monthly",
            ChartPeriod::Quarterly => "Quarterly",
            ChartPeriod::Yearly => "Yearly",
        }
    }
}

/// Quantity plotted on the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    Sales,
    Profit,
}

impl ChartMetric {
    pub const ALL: [ChartMetric; 2] = [ChartMetric::Sales, ChartMetric::Profit];

    pub fn label(&self) -> &'static str {
        match self {
            ChartMetric::Sales => "Sales",
            ChartMetric::Profit => "Profit",
        }
    }
}

/// Chart type used to draw the selected series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Line, ChartKind::Bar];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
        }
    }
}

/// The three chart controls taken together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSelection {
    pub period: ChartPeriod,
    pub metric: ChartMetric,
    pub kind: ChartKind,
}

impl Default for ChartSelection {
    fn default() -> Self {
        Self {
            period: ChartPeriod::Monthly,
            metric: ChartMetric::Sales,
            kind: ChartKind::Line,
        }
    }
}

/// Whole-window colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_dark(!self.is_dark())
    }

    /// Value written under the `theme` storage key
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
