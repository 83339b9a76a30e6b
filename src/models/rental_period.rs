//! The rental period model.
//!
//! A [`RentalPeriod`] is produced once per calculation by
//! [`get_rental_period`](crate::calculation::get_rental_period) and is never
//! mutated afterwards, so its fields are only readable through accessors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The outcome of a chargeable-days calculation.
///
/// The billable window is `(checkout_date, return_date]`: the checkout day is
/// never charged and the return day always belongs to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RentalPeriod {
    checkout_date: NaiveDate,
    rental_days: u32,
    return_date: NaiveDate,
    charge_days: u32,
}

impl RentalPeriod {
    pub(crate) fn new(
        checkout_date: NaiveDate,
        rental_days: u32,
        return_date: NaiveDate,
        charge_days: u32,
    ) -> Self {
        debug_assert!(charge_days <= rental_days);
        Self {
            checkout_date,
            rental_days,
            return_date,
            charge_days,
        }
    }

    /// The day the tool leaves the store.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// The number of calendar days rented.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// `checkout_date + rental_days`.
    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    /// The number of billable days in the window.
    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_constructed_values() {
        let checkout = NaiveDate::from_ymd_opt(2024, 11, 11).unwrap();
        let return_date = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
        let period = RentalPeriod::new(checkout, 3, return_date, 2);

        assert_eq!(period.checkout_date(), checkout);
        assert_eq!(period.rental_days(), 3);
        assert_eq!(period.return_date(), return_date);
        assert_eq!(period.charge_days(), 2);
    }

    #[test]
    fn test_rental_period_serialization() {
        let period = RentalPeriod::new(
            NaiveDate::from_ymd_opt(2024, 7, 3).unwrap(),
            3,
            NaiveDate::from_ymd_opt(2024, 7, 6).unwrap(),
            1,
        );

        let json = serde_json::to_string(&period).unwrap();
        assert!(json.contains("\"checkout_date\":\"2024-07-03\""));
        assert!(json.contains("\"rental_days\":3"));
        assert!(json.contains("\"return_date\":\"2024-07-06\""));
        assert!(json.contains("\"charge_days\":1"));
    }
}
