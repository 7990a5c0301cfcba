//! Report periods
//!
//! A report covers either the months of one year (`year`) or every calendar
//! year with activity up to the as-of date (`all`). Periods are identified by
//! an integer key: the month number (1-12) or the calendar year.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::aggregate::PeriodPoint;
use crate::error::{TallyError, TallyResult};

/// Month number (1-12) in `year` mode, calendar year in `all` mode
pub type PeriodKey = i32;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How a report buckets transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// January through the as-of month, bucketed by month
    #[default]
    Year,
    /// Earliest transaction year through the as-of year, bucketed by year
    All,
}

impl RangeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::All => "all",
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RangeMode {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "all" => Ok(Self::All),
            other => Err(TallyError::Validation(format!(
                "Unknown report range '{}', expected 'year' or 'all'",
                other
            ))),
        }
    }
}

/// Produce the ordered, contiguous sequence of periods to report on
///
/// In `year` mode this is `1..=as_of.month()`. In `all` mode it runs from the
/// earliest key found in either point list to `as_of.year()`; with no points
/// at all the sequence is just the as-of year, so it is never empty.
pub fn calculate_period(
    expenses: &[PeriodPoint],
    income: &[PeriodPoint],
    range: RangeMode,
    as_of: NaiveDate,
) -> Vec<PeriodKey> {
    match range {
        RangeMode::Year => (1..=as_of.month() as PeriodKey).collect(),
        RangeMode::All => {
            let current_year = as_of.year();
            let earliest = expenses
                .iter()
                .chain(income)
                .map(|point| point.key)
                .min()
                .map_or(current_year, |year| year.min(current_year));
            (earliest..=current_year).collect()
        }
    }
}

/// Display label for a period key
///
/// Months become their three-letter abbreviation; years are shown as-is.
/// A month outside 1-12 is rejected rather than wrapped.
pub fn period_value(range: RangeMode, period: PeriodKey) -> TallyResult<String> {
    match range {
        RangeMode::Year => usize::try_from(period)
            .ok()
            .and_then(|month| month.checked_sub(1))
            .and_then(|index| MONTH_ABBREVIATIONS.get(index))
            .map(|label| label.to_string())
            .ok_or_else(|| TallyError::Validation(format!("Month out of range: {}", period))),
        RangeMode::All => Ok(period.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(key: PeriodKey, dollars: i64) -> PeriodPoint {
        PeriodPoint::new(key, Money::from_dollars(dollars))
    }

    #[test]
    fn test_month_labels() {
        let labels: Vec<String> = (1..=12)
            .map(|m| period_value(RangeMode::Year, m).unwrap())
            .collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn test_month_out_of_range_fails() {
        assert!(period_value(RangeMode::Year, 0).unwrap_err().is_validation());
        assert!(period_value(RangeMode::Year, 13).unwrap_err().is_validation());
        assert!(period_value(RangeMode::Year, -1).is_err());
    }

    #[test]
    fn test_year_labels_are_identity() {
        for year in [2011, 2010, 2000, 1901, 1867] {
            assert_eq!(period_value(RangeMode::All, year).unwrap(), year.to_string());
        }
    }

    #[test]
    fn test_year_range_runs_to_as_of_month() {
        let periods = calculate_period(&[], &[], RangeMode::Year, date(2011, 5, 15));
        assert_eq!(periods, vec![1, 2, 3, 4, 5]);

        let periods = calculate_period(&[], &[], RangeMode::Year, date(2010, 12, 1));
        assert_eq!(periods.len(), 12);
    }

    #[test]
    fn test_all_range_without_points_is_as_of_year() {
        let periods = calculate_period(&[], &[], RangeMode::All, date(2026, 10, 16));
        assert_eq!(periods, vec![2026]);
    }

    #[test]
    fn test_all_range_income_earlier_than_expenses() {
        let income = [point(2009, 12000), point(2010, 13000)];
        let expenses = [point(2010, 13000)];

        let periods = calculate_period(&expenses, &income, RangeMode::All, date(2010, 5, 3));
        assert_eq!(periods, vec![2009, 2010]);
    }

    #[test]
    fn test_all_range_expenses_earlier_than_income() {
        let income = [point(2009, 12000)];
        let expenses = [point(2009, 12000), point(2010, 13000)];

        let periods = calculate_period(&expenses, &income, RangeMode::All, date(2010, 5, 3));
        assert_eq!(periods, vec![2009, 2010]);
    }

    #[test]
    fn test_all_range_fills_gaps() {
        let income = [point(2004, 1)];
        let expenses = [point(2007, -1)];

        let periods = calculate_period(&expenses, &income, RangeMode::All, date(2008, 1, 1));
        assert_eq!(periods, vec![2004, 2005, 2006, 2007, 2008]);
    }

    #[test]
    fn test_all_range_with_only_future_points() {
        let income = [point(2030, 5)];
        let periods = calculate_period(&[], &income, RangeMode::All, date(2026, 1, 1));
        assert_eq!(periods, vec![2026]);
    }

    #[test]
    fn test_range_mode_parse() {
        assert_eq!("year".parse::<RangeMode>().unwrap(), RangeMode::Year);
        assert_eq!(" ALL ".parse::<RangeMode>().unwrap(), RangeMode::All);
        assert!("month".parse::<RangeMode>().unwrap_err().is_validation());
    }
}
