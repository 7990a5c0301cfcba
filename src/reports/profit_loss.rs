//! Profit / Loss report
//!
//! Nets each period's income against its expenses and reports the result in
//! one of two columns: a positive net goes to the profit column, a negative
//! net (kept negative) to the loss column.

use chrono::NaiveDate;
use tracing::debug;

use super::aggregate::SplitPoints;
use super::period::{calculate_period, period_value, RangeMode};
use super::source::TransactionSource;
use super::table::{ReportKind, ReportRow, ReportTable};
use crate::error::TallyResult;
use crate::models::UserId;

/// Build the profit/loss table for a user
pub fn calculate_profit_loss<S>(
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
    let periods = calculate_period(&points.expenses, &points.income, range, as_of);

    let rows = periods
        .into_iter()
        .map(|period| {
            let (income, expenses) = points.totals_for(period);
            let net = income + expenses;
            Ok(ReportRow::new(
                period_value(range, period)?,
                net.positive_part(),
                net.negative_part(),
            ))
        })
        .collect::<TallyResult<Vec<_>>>()?;

    debug!(
        %user_id,
        %range,
        %as_of,
        transactions = transactions.len(),
        rows = rows.len(),
        "calculated profit/loss report"
    );

    Ok(ReportTable::new(ReportKind::ProfitLoss, range, as_of, rows))
}
