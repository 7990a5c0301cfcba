//! Reports module for Tally
//!
//! Profit/loss and income/expense reports, aggregated by month within a year
//! or by year across all time.
//!
//! A report is built in three steps: transactions are summed into
//! `PeriodPoint`s (`aggregate`), the list of periods to show is generated
//! (`period`), and each period is resolved against the points to give one
//! dense `ReportTable` row (`profit_loss`, `income_expenses`).

pub mod aggregate;
pub mod income_expenses;
pub mod period;
pub mod profit_loss;
pub mod source;
pub mod table;

pub use aggregate::{get_value_for_period, group_by_period, PeriodPoint, SplitPoints};
pub use income_expenses::calculate_income_expenses;
pub use period::{calculate_period, period_value, PeriodKey, RangeMode};
pub use profit_loss::calculate_profit_loss;
pub use source::TransactionSource;
pub use table::{ReportKind, ReportRow, ReportTable};
