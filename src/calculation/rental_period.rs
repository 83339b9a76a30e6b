//! Rental period and chargeable-day calculation.
//!
//! This module turns a checkout date, a rental length and a
//! [`ChargePolicy`] into a [`RentalPeriod`]. The billable window is
//! `(checkout_date, return_date]`: billing starts the day after checkout and
//! includes the return day.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{RentalError, RentalResult};
use crate::models::{ChargePolicy, RentalPeriod};

use super::day_detection::classify_day;
use super::holidays::observed_holidays;

/// Calculates the return date and chargeable days of a rental.
///
/// Each day of the window is classified as holiday, weekend or weekday (in
/// that order of precedence) and counted when `policy` charges for that
/// classification. Holidays are looked up in the calendar of the day's own
/// year, so windows crossing December 31 are handled.
///
/// # Arguments
///
/// * `checkout_date` - The day the tool leaves; never itself charged
/// * `rental_days` - Number of days rented; zero is allowed
/// * `policy` - Which day types are billable for the tool
///
/// # Errors
///
/// Returns [`RentalError::InvalidArgument`] before evaluating any day if:
/// - `checkout_date` is `None`
/// - `rental_days` is negative
/// - the return date cannot be represented
///
/// # Example
///
/// ```
/// use tool_rental::calculation::get_rental_period;
/// use tool_rental::models::ChargePolicy;
/// use chrono::NaiveDate;
///
/// // Wednesday 2024-07-03 for 3 days: Thu Jul 4 (holiday), Fri Jul 5, Sat Jul 6
/// let checkout = NaiveDate::from_ymd_opt(2024, 7, 3);
/// let period = get_rental_period(checkout, 3, ChargePolicy::new(true, false, false)).unwrap();
///
/// assert_eq!(period.return_date(), NaiveDate::from_ymd_opt(2024, 7, 6).unwrap());
/// assert_eq!(period.charge_days(), 1);
/// ```
pub fn get_rental_period(
    checkout_date: Option<NaiveDate>,
    rental_days: i64,
    policy: ChargePolicy,
) -> RentalResult<RentalPeriod> {
    let checkout_date = checkout_date.ok_or_else(|| {
        RentalError::invalid_argument("checkout_date", "checkout date is required")
    })?;

    if rental_days < 0 {
        return Err(RentalError::invalid_argument(
            "rental_days",
            format!("rental days must not be negative (got {})", rental_days),
        ));
    }

    let out_of_range = || {
        RentalError::invalid_argument(
            "rental_days",
            format!(
                "{} rental days from {} is outside the supported calendar",
                rental_days, checkout_date
            ),
        )
    };
    let days = u32::try_from(rental_days).map_err(|_| out_of_range())?;
    let return_date = checkout_date
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(out_of_range)?;

    let charge_days = count_charge_days(checkout_date, days, policy);

    Ok(RentalPeriod::new(checkout_date, days, return_date, charge_days))
}

/// Counts the billable days in `(checkout_date, checkout_date + days]`.
///
/// Days are reached by offset rather than by iterating dates, so a window
/// ending on [`NaiveDate::MAX`] still includes its last day. The caller has
/// already checked that the whole window is representable.
fn count_charge_days(checkout_date: NaiveDate, days: u32, policy: ChargePolicy) -> u32 {
    let mut holidays_by_year: HashMap<i32, BTreeSet<NaiveDate>> = HashMap::new();
    let mut charge_days = 0;

    for day in (1..=u64::from(days))
        .filter_map(|offset| checkout_date.checked_add_days(Days::new(offset)))
    {
        let holidays = holidays_by_year
            .entry(day.year())
            .or_insert_with(|| observed_holidays(day.year()));

        if policy.charges(classify_day(day, holidays)) {
            charge_days += 1;
        }
    }

    charge_days
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DAYS: ChargePolicy = ChargePolicy::new(true, true, true);
    const NO_WEEKENDS: ChargePolicy = ChargePolicy::new(true, false, true);
    const NO_WEEKDAYS: ChargePolicy = ChargePolicy::new(false, true, true);
    const WEEKDAYS_ONLY: ChargePolicy = ChargePolicy::new(true, false, false);
    const HOLIDAYS_ONLY: ChargePolicy = ChargePolicy::new(false, false, true);
    const NO_HOLIDAYS: ChargePolicy = ChargePolicy::new(true, true, false);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_rental_period(
        expected_charge_days: u32,
        policy: ChargePolicy,
        checkout_date: NaiveDate,
        rental_days: u32,
    ) {
        let period =
            get_rental_period(Some(checkout_date), i64::from(rental_days), policy).unwrap();

        assert_eq!(
            period.charge_days(),
            expected_charge_days,
            "charge days for {} + {} days under {:?}",
            checkout_date,
            rental_days,
            policy
        );
        assert_eq!(period.rental_days(), rental_days);
        assert_eq!(period.checkout_date(), checkout_date);
        assert_eq!(
            period.return_date(),
            checkout_date + Days::new(u64::from(rental_days))
        );
    }

    #[test]
    fn test_all_days_charged() {
        assert_rental_period(3, ALL_DAYS, date(2024, 11, 11), 3); // Mon
        assert_rental_period(4, ALL_DAYS, date(2024, 11, 16), 4); // Sat
        assert_rental_period(31, ALL_DAYS, date(2024, 6, 20), 31); // spans Jul 4
    }

    #[test]
    fn test_no_weekend_charge() {
        assert_rental_period(4, NO_WEEKENDS, date(2024, 11, 16), 5); // Sat: Sun..Thu
        assert_rental_period(0, NO_WEEKENDS, date(2024, 11, 15), 2); // Fri: Sat, Sun
        assert_rental_period(2, NO_WEEKENDS, date(2024, 11, 17), 2); // Sun: Mon, Tue
        assert_rental_period(1, NO_WEEKENDS, date(2024, 11, 16), 2); // Sat: Sun, Mon
        assert_rental_period(6, NO_WEEKENDS, date(2024, 11, 16), 9);
        assert_rental_period(5, NO_WEEKENDS, date(2024, 11, 17), 7);
        assert_rental_period(21, NO_WEEKENDS, date(2024, 11, 1), 31);
        assert_rental_period(0, NO_WEEKENDS, date(2024, 11, 1), 0);
    }

    #[test]
    fn test_no_weekday_charge() {
        assert_rental_period(1, NO_WEEKDAYS, date(2024, 11, 16), 5);
        assert_rental_period(2, NO_WEEKDAYS, date(2024, 11, 15), 2);
        assert_rental_period(0, NO_WEEKDAYS, date(2024, 11, 17), 2);
        assert_rental_period(1, NO_WEEKDAYS, date(2024, 11, 16), 2);
        assert_rental_period(3, NO_WEEKDAYS, date(2024, 11, 16), 9);
        assert_rental_period(2, NO_WEEKDAYS, date(2024, 11, 17), 7);
        assert_rental_period(10, NO_WEEKDAYS, date(2024, 11, 1), 31);
        assert_rental_period(0, NO_WEEKDAYS, date(2024, 11, 1), 0);
    }

    #[test]
    fn test_independence_day_window() {
        // Jul 4 (Thu, holiday), Jul 5 (Fri), Jul 6 (Sat)
        assert_rental_period(1, HOLIDAYS_ONLY, date(2024, 7, 3), 3);
        assert_rental_period(1, WEEKDAYS_ONLY, date(2024, 7, 3), 3);
        assert_rental_period(2, NO_HOLIDAYS, date(2024, 7, 3), 3);
    }

    #[test]
    fn test_labor_day_window_crosses_month() {
        // Sun 2024-09-01: Sep 2 (Mon, Labor Day), Sep 3 (Tue), Sep 4 (Wed)
        assert_rental_period(2, WEEKDAYS_ONLY, date(2024, 9, 1), 3);
        assert_rental_period(1, HOLIDAYS_ONLY, date(2024, 9, 1), 3);
        assert_rental_period(2, NO_HOLIDAYS, date(2024, 9, 1), 3);

        // Mon 2024-08-26 for 7 days ends on Labor Day
        assert_rental_period(1, HOLIDAYS_ONLY, date(2024, 8, 26), 7);
        assert_rental_period(0, HOLIDAYS_ONLY, date(2024, 8, 26), 6);
    }

    #[test]
    fn test_saturday_independence_day_shift_to_friday() {
        // 2026: observed Fri Jul 3; window Fri Jul 3, Sat Jul 4, Sun Jul 5
        assert_rental_period(0, WEEKDAYS_ONLY, date(2026, 7, 2), 3);
        assert_rental_period(2, NO_HOLIDAYS, date(2026, 7, 2), 3);
        assert_rental_period(1, HOLIDAYS_ONLY, date(2026, 7, 2), 3);
    }

    #[test]
    fn test_sunday_independence_day_shift_to_monday() {
        // 2027: observed Mon Jul 5; window Sat Jul 3 .. Tue Jul 6
        assert_rental_period(1, WEEKDAYS_ONLY, date(2027, 7, 2), 4);
        assert_rental_period(1, HOLIDAYS_ONLY, date(2027, 7, 2), 4);
    }

    #[test]
    fn test_checkout_day_is_never_charged() {
        // Checkout on the holiday itself: only Jul 5 (Fri) is in the window.
        assert_rental_period(0, HOLIDAYS_ONLY, date(2024, 7, 4), 1);
        assert_rental_period(1, WEEKDAYS_ONLY, date(2024, 7, 4), 1);
    }

    #[test]
    fn test_return_day_is_charged() {
        // Fri 2024-11-15 for 3 days: Sat, Sun, Mon; Monday is the return day.
        assert_rental_period(1, WEEKDAYS_ONLY, date(2024, 11, 15), 3);
    }

    #[test]
    fn test_window_crossing_year_boundary() {
        // Mon 2024-12-30: Dec 31, Jan 1, Jan 2, Jan 3, Jan 4 (Sat)
        assert_rental_period(4, NO_WEEKENDS, date(2024, 12, 30), 5);
        assert_rental_period(5, ALL_DAYS, date(2024, 12, 30), 5);
    }

    #[test]
    fn test_multi_year_window_uses_each_years_holidays() {
        // Thu 2026-07-02 through 2027-07-06 covers 2026-07-03, 2026-09-07
        // and 2027-07-05.
        let period = get_rental_period(Some(date(2026, 7, 2)), 369, HOLIDAYS_ONLY).unwrap();
        assert_eq!(period.return_date(), date(2027, 7, 6));
        assert_eq!(period.charge_days(), 3);
    }

    #[test]
    fn test_zero_rental_days() {
        for policy in [ALL_DAYS, NO_WEEKENDS, NO_WEEKDAYS, HOLIDAYS_ONLY] {
            let period = get_rental_period(Some(date(2024, 7, 3)), 0, policy).unwrap();
            assert_eq!(period.charge_days(), 0);
            assert_eq!(period.return_date(), date(2024, 7, 3));
        }
    }

    #[test]
    fn test_missing_checkout_date_is_invalid_argument() {
        let result = get_rental_period(None, 3, ALL_DAYS);
        match result {
            Err(RentalError::InvalidArgument { field, .. }) => {
                assert_eq!(field, "checkout_date");
            }
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_rental_days_is_invalid_argument() {
        let result = get_rental_period(Some(date(2024, 11, 11)), -1, ALL_DAYS);
        match result {
            Err(RentalError::InvalidArgument { field, message }) => {
                assert_eq!(field, "rental_days");
                assert!(message.contains("-1"));
            }
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }
    }

    #[test]
    fn test_unrepresentable_return_date_is_invalid_argument() {
        let result = get_rental_period(Some(NaiveDate::MAX), 1, ALL_DAYS);
        assert!(matches!(
            result,
            Err(RentalError::InvalidArgument { ref field, .. }) if field == "rental_days"
        ));

        let result = get_rental_period(Some(date(2024, 1, 1)), i64::MAX, ALL_DAYS);
        assert!(matches!(result, Err(RentalError::InvalidArgument { .. })));
    }

    #[test]
    fn test_window_ending_on_last_representable_date() {
        let checkout = NaiveDate::MAX - Days::new(1);
        let period = get_rental_period(Some(checkout), 1, ALL_DAYS).unwrap();

        assert_eq!(period.return_date(), NaiveDate::MAX);
        assert_eq!(period.charge_days(), 1);

        let checkout = NaiveDate::MAX - Days::new(10);
        let period = get_rental_period(Some(checkout), 10, ALL_DAYS).unwrap();
        assert_eq!(period.charge_days(), 10);
    }
}
