//! Income / Expenses report
//!
//! Same periods and grouping as the profit/loss report, but income and
//! expenses get their own columns. Expenses are shown as a positive
//! magnitude.

use chrono::NaiveDate;
use tracing::debug;

use super::aggregate::SplitPoints;
use super::period::{calculate_period, period_value, RangeMode};
use super::source::TransactionSource;
use super::table::{ReportKind, ReportRow, ReportTable};
use crate::error::TallyResult;
use crate::models::UserId;

/// Build the income/expenses table for a user
pub fn calculate_income_expenses<S>(
    source: &S,
    range: RangeMode,
    user_id: UserId,
    as_of: NaiveDate,
) -> TallyResult<ReportTable>
where
    S: TransactionSource + ?Sized,
{
    let transactions = source.transactions_for_user(user_id)?;
    let points = SplitPoints::from_transactions(&transactions, range, as_of);

    let mut rows = Vec::new();
    for period in calculate_period(&points.expenses, &points.income, range, as_of) {
        let (income, expenses) = points.totals_for(period);
        rows.push(ReportRow::new(period_value(range, period)?, income, expenses.abs()));
    }

    debug!(
        %user_id,
        %range,
        %as_of,
        transactions = transactions.len(),
        rows = rows.len(),
        "calculated income/expenses report"
    );

    Ok(ReportTable::new(ReportKind::IncomeExpenses, range, as_of, rows))
}
