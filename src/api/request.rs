//! Request types for the tool rental API.
//!
//! This module defines the JSON request structures for the `/checkout` and
//! `/rental-period` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ChargePolicy;

/// Request body for the `/checkout` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Code of the tool being rented (e.g., "LADW").
    pub tool_code: String,
    /// Number of days rented; must be at least 1.
    pub rental_days: i64,
    /// Whole-number discount percent in `0..=100`.
    #[serde(default)]
    pub discount_percent: i64,
    /// The day the tool leaves the store.
    pub checkout_date: NaiveDate,
}

/// Request body for the `/rental-period` endpoint.
///
/// `checkout_date` may be omitted or null; the calculator reports that as an
/// invalid argument rather than a malformed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalPeriodRequest {
    /// The day the tool leaves the store.
    #[serde(default)]
    pub checkout_date: Option<NaiveDate>,
    /// Number of days rented; zero is allowed.
    pub rental_days: i64,
    /// Whether non-holiday weekdays are billed.
    pub charge_on_weekday: bool,
    /// Whether non-holiday weekend days are billed.
    pub charge_on_weekend: bool,
    /// Whether observed holidays are billed.
    pub charge_on_holiday: bool,
}

impl RentalPeriodRequest {
    /// Returns the charge policy described by the request flags.
    pub fn policy(&self) -> ChargePolicy {
        ChargePolicy::new(
            self.charge_on_weekday,
            self.charge_on_weekend,
            self.charge_on_holiday,
        )
    }
}
