//! Day classification for chargeable-day counting.
//!
//! This module determines whether a calendar day is a weekday, a weekend day
//! or an observed holiday. Holiday status always takes precedence over the
//! day of the week.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the billing classification of a single day.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not an observed holiday.
    Weekday,
    /// Saturday or Sunday, not an observed holiday.
    Weekend,
    /// An observed holiday, regardless of the day of the week.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true for Saturdays and Sundays.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-11-16 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 11, 16).unwrap()));
/// // 2024-11-18 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 11, 18).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies `date` against a set of observed holiday dates.
///
/// The caller supplies the holiday set for the year of `date`. Membership is
/// checked before the day of the week, so a holiday landing on a weekend is
/// still a [`DayType::Holiday`].
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{classify_day, observed_holidays, DayType};
/// use chrono::NaiveDate;
///
/// let holidays = observed_holidays(2024);
/// let july_4 = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// let july_6 = NaiveDate::from_ymd_opt(2024, 7, 6).unwrap();
/// assert_eq!(classify_day(july_4, &holidays), DayType::Holiday);
/// assert_eq!(classify_day(july_6, &holidays), DayType::Weekend);
/// ```
pub fn classify_day(date: NaiveDate, holidays: &BTreeSet<NaiveDate>) -> DayType {
    if holidays.contains(&date) {
        DayType::Holiday
    } else if is_weekend(date) {
        DayType::Weekend
    } else {
        DayType::Weekday
    }
}
