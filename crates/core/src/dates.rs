//! Reporting-period date arithmetic.

use chrono::{Datelike, NaiveDate};

/// Last day of the calendar quarter after the quarter containing `prior`.
///
/// A prior NAV dated anywhere in Q4 rolls into Q1 of the next year.
pub fn next_quarter_end(prior: NaiveDate) -> NaiveDate {
    let quarter = prior.month0() / 3 + 1;
    let (year, end_month) = if quarter == 4 {
        (prior.year() + 1, 3)
    } else {
        (prior.year(), (quarter + 1) * 3)
    };

    // First day of the following month, minus one day.
    let (next_year, next_month) = if end_month == 12 {
        (year + 1, 1)
    } else {
        (year, end_month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("valid first-of-month")
        .pred_opt()
        .expect("not before epoch")
}
