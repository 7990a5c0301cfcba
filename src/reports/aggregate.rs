//! Period aggregation
//!
//! Transactions are summed into one `PeriodPoint` per period key before any
//! lookup happens, so `get_value_for_period` never has to combine duplicates.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::period::{PeriodKey, RangeMode};
use crate::models::{Money, Transaction};

/// Summed value for one period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPoint {
    pub key: PeriodKey,
    pub value: Money,
}

impl PeriodPoint {
    pub fn new(key: PeriodKey, value: Money) -> Self {
        Self { key, value }
    }
}

/// Value of the first point whose key matches, zero when none does
pub fn get_value_for_period(points: &[PeriodPoint], key: PeriodKey) -> Money {
    points
        .iter()
        .find(|point| point.key == key)
        .map(|point| point.value)
        .unwrap_or_default()
}

/// The period key a transaction falls into, or `None` when it is outside
/// the reported range
pub fn period_key(txn: &Transaction, range: RangeMode, as_of: NaiveDate) -> Option<PeriodKey> {
    match range {
        RangeMode::Year if txn.year() == as_of.year() => Some(txn.month() as PeriodKey),
        RangeMode::Year => None,
        RangeMode::All => Some(txn.year()),
    }
}

/// Sum transactions by period key, ascending, one point per key
pub fn group_by_period<'a, I>(transactions: I, range: RangeMode, as_of: NaiveDate) -> Vec<PeriodPoint>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<PeriodKey, Money> = BTreeMap::new();

    for txn in transactions {
        if let Some(key) = period_key(txn, range, as_of) {
            *totals.entry(key).or_default() += txn.amount;
        }
    }

    totals
        .into_iter()
        .map(|(key, value)| PeriodPoint::new(key, value))
        .collect()
}

/// Income and expense points for one user's transactions
#[derive(Debug, Clone, Default)]
pub struct SplitPoints {
    /// Sums of negative amounts (values are <= 0)
    pub expenses: Vec<PeriodPoint>,
    /// Sums of positive amounts (values are >= 0)
    pub income: Vec<PeriodPoint>,
}

impl SplitPoints {
    pub fn from_transactions(transactions: &[Transaction], range: RangeMode, as_of: NaiveDate) -> Self {
        let (income, expenses): (Vec<&Transaction>, Vec<&Transaction>) = transactions
            .iter()
            .filter(|txn| !txn.amount.is_zero())
            .partition(|txn| txn.is_income());

        Self {
            expenses: group_by_period(expenses, range, as_of),
            income: group_by_period(income, range, as_of),
        }
    }

    /// Resolved (income, expense) totals for a period
    pub fn totals_for(&self, key: PeriodKey) -> (Money, Money) {
        (
            get_value_for_period(&self.income, key),
            get_value_for_period(&self.expenses, key),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn as_of(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_first_match_wins() {
        let points = [
            PeriodPoint::new(2010, Money::from_dollars(123)),
            PeriodPoint::new(2011, Money::from_dollars(324)),
            PeriodPoint::new(2011, Money::from_dollars(200)),
        ];

        assert_eq!(get_value_for_period(&points, 2010), Money::from_dollars(123));
        assert_eq!(get_value_for_period(&points, 2011), Money::from_dollars(324));
    }

    #[test]
    fn test_missing_period_is_zero() {
        let points = [PeriodPoint::new(2010, Money::from_dollars(123))];
        assert_eq!(get_value_for_period(&points, 2012), Money::zero());
        assert_eq!(get_value_for_period(&[], 1), Money::zero());
    }

    #[test]
    fn test_group_by_year_sums_each_key_once() {
        let user = UserId::new();
        let txns = vec![
            Transaction::debit(user, "a", at(2010, 1, 15), Money::from_dollars(20)),
            Transaction::debit(user, "b", at(2010, 2, 23), Money::from_dollars(40)),
            Transaction::debit(user, "c", at(2011, 3, 13), Money::from_dollars(100)),
        ];

        let points = group_by_period(&txns, RangeMode::All, as_of(2012, 1));
        assert_eq!(
            points,
            vec![
                PeriodPoint::new(2010, Money::from_dollars(-60)),
                PeriodPoint::new(2011, Money::from_dollars(-100)),
            ]
        );
    }

    #[test]
    fn test_group_by_month_only_counts_as_of_year() {
        let user = UserId::new();
        let txns = vec![
            Transaction::credit(user, "a", at(2010, 2, 12), Money::from_dollars(75)),
            Transaction::credit(user, "b", at(2010, 2, 15), Money::from_dollars(200)),
            Transaction::credit(user, "c", at(2009, 2, 1), Money::from_dollars(999)),
            Transaction::credit(user, "d", at(2011, 1, 1), Money::from_dollars(999)),
        ];

        let points = group_by_period(&txns, RangeMode::Year, as_of(2010, 12));
        assert_eq!(points, vec![PeriodPoint::new(2, Money::from_dollars(275))]);
    }

    #[test]
    fn test_split_points_by_sign() {
        let user = UserId::new();
        let txns = vec![
            Transaction::debit(user, "rent", at(2010, 1, 15), Money::from_dollars(20)),
            Transaction::credit(user, "pay", at(2010, 1, 20), Money::from_dollars(80)),
        ];

        let points = SplitPoints::from_transactions(&txns, RangeMode::Year, as_of(2010, 12));
        assert_eq!(points.income, vec![PeriodPoint::new(1, Money::from_dollars(80))]);
        assert_eq!(points.expenses, vec![PeriodPoint::new(1, Money::from_dollars(-20))]);
        assert_eq!(
            points.totals_for(1),
            (Money::from_dollars(80), Money::from_dollars(-20))
        );
        assert_eq!(points.totals_for(2), (Money::zero(), Money::zero()));
    }
}
