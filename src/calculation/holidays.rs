//! Observed holiday calendar.
//!
//! This module maps a calendar year to the dates on which the two fixed
//! holidays, Independence Day and Labor Day, are observed for billing.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A fixed holiday recognised for billing.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::Holiday;
/// use chrono::NaiveDate;
///
/// // July 4, 2026 is a Saturday, so it is observed on Friday July 3.
/// assert_eq!(
///     Holiday::IndependenceDay.observed_date(2026),
///     NaiveDate::from_ymd_opt(2026, 7, 3)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    /// July 4, shifted to the nearest weekday when it falls on a weekend.
    IndependenceDay,
    /// The first Monday of September.
    LaborDay,
}

impl Holiday {
    /// Every fixed holiday, in calendar order.
    pub const ALL: [Holiday; 2] = [Holiday::IndependenceDay, Holiday::LaborDay];

    /// Returns the holiday's date before any weekend shift.
    ///
    /// Returns `None` only for years the date library cannot represent.
    pub fn nominal_date(self, year: i32) -> Option<NaiveDate> {
        match self {
            Holiday::IndependenceDay => NaiveDate::from_ymd_opt(year, 7, 4),
            Holiday::LaborDay => NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1),
        }
    }

    /// Returns the date on which the holiday is observed in `year`.
    ///
    /// A Saturday Independence Day is observed the Friday before, a Sunday
    /// one the Monday after. Labor Day is always a Monday and never shifts.
    pub fn observed_date(self, year: i32) -> Option<NaiveDate> {
        let nominal = self.nominal_date(year)?;
        match nominal.weekday() {
            Weekday::Sat => nominal.pred_opt(),
            Weekday::Sun => nominal.succ_opt(),
            _ => Some(nominal),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Holiday::IndependenceDay => write!(f, "Independence Day"),
            Holiday::LaborDay => write!(f, "Labor Day"),
        }
    }
}

/// A holiday together with its nominal and observed dates for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedHoliday {
    /// Which holiday this is.
    pub holiday: Holiday,
    /// The date before any weekend shift.
    pub nominal_date: NaiveDate,
    /// The date the holiday is recognised for billing.
    pub observed_date: NaiveDate,
}

/// Returns the observed holiday dates for `year`, in calendar order.
///
/// Any year is accepted. Years outside the range of [`NaiveDate`] yield an
/// empty set.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::observed_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = observed_holidays(2024);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()));
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()));
/// assert_eq!(holidays.len(), 2);
/// ```
pub fn observed_holidays(year: i32) -> BTreeSet<NaiveDate> {
    Holiday::ALL
        .iter()
        .filter_map(|holiday| holiday.observed_date(year))
        .collect()
}

/// Returns each fixed holiday for `year` with its nominal and observed dates.
pub fn holidays_for_year(year: i32) -> Vec<ObservedHoliday> {
    Holiday::ALL
        .iter()
        .filter_map(|&holiday| {
            Some(ObservedHoliday {
                holiday,
                nominal_date: holiday.nominal_date(year)?,
                observed_date: holiday.observed_date(year)?,
            })
        })
        .collect()
}

/// Returns true if `date` is an observed holiday in its own year.
pub fn is_observed_holiday(date: NaiveDate) -> bool {
    observed_holidays(date.year()).contains(&date)
}
