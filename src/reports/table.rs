//! Report table
//!
//! The dense, zero-filled output of the report calculators: one row per
//! period, each with a label and two money columns.

use chrono::NaiveDate;
use std::io::Write;

use super::period::RangeMode;
use crate::error::{TallyError, TallyResult};
use crate::models::Money;

/// Which calculator produced a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Columns: profit (>= 0), loss (<= 0)
    ProfitLoss,
    /// Columns: income (>= 0), expenses as a positive magnitude
    IncomeExpenses,
}

impl ReportKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ProfitLoss => "Profit / Loss",
            Self::IncomeExpenses => "Income / Expenses",
        }
    }

    /// Header for the label column and the two value columns
    pub fn headers(&self) -> [&'static str; 3] {
        match self {
            Self::ProfitLoss => ["Period", "Profit", "Loss"],
            Self::IncomeExpenses => ["Period", "Income", "Expenses"],
        }
    }
}

/// One period of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub label: String,
    pub values: [Money; 2],
}

impl ReportRow {
    pub fn new(label: impl Into<String>, first: Money, second: Money) -> Self {
        Self {
            label: label.into(),
            values: [first, second],
        }
    }
}

/// A complete report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub range: RangeMode,
    pub as_of: NaiveDate,
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new(kind: ReportKind, range: RangeMode, as_of: NaiveDate, rows: Vec<ReportRow>) -> Self {
        Self {
            kind,
            range,
            as_of,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a row by its period label
    pub fn row(&self, label: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// Column sums across all periods
    pub fn totals(&self) -> [Money; 2] {
        self.rows.iter().fold([Money::zero(); 2], |[a, b], row| {
            [a + row.values[0], b + row.values[1]]
        })
    }

    /// Export the table as CSV with a header row
    pub fn export_csv<W: Write>(&self, writer: W) -> TallyResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(self.kind.headers())?;

        for row in &self.rows {
            csv.write_record([
                row.label.clone(),
                row.values[0].to_decimal_string(),
                row.values[1].to_decimal_string(),
            ])?;
        }

        csv.flush()
            .map_err(|e| TallyError::Export(format!("Failed to flush report CSV: {}", e)))
    }
}
