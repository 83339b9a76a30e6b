//! Calculation logic for the tool rental engine.
//!
//! This module contains the observed holiday calendar, day classification,
//! the rental period / chargeable-days calculator and rental pricing.

mod day_detection;
mod holidays;
mod pricing;
mod rental_period;

pub use day_detection::{DayType, classify_day, is_weekend};
pub use holidays::{
    Holiday, ObservedHoliday, holidays_for_year, is_observed_holiday, observed_holidays,
};
pub use pricing::{RentalCharge, calculate_charge, round_to_cents};
pub use rental_period::get_rental_period;
