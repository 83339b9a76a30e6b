//! Rental agreement model.
//!
//! This module contains the [`RentalAgreement`] produced by a checkout and
//! its customer-facing text rendering.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A priced rental, ready to be shown to the customer.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalAgreement;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let agreement = RentalAgreement {
///     tool_code: "LADW".to_string(),
///     tool_type: "Ladder".to_string(),
///     tool_brand: "Werner".to_string(),
///     rental_days: 3,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     due_date: NaiveDate::from_ymd_opt(2020, 7, 5).unwrap(),
///     daily_rental_charge: Decimal::from_str("1.99").unwrap(),
///     charge_days: 2,
///     pre_discount_charge: Decimal::from_str("3.98").unwrap(),
///     discount_percent: 10,
///     discount_amount: Decimal::from_str("0.40").unwrap(),
///     final_charge: Decimal::from_str("3.58").unwrap(),
/// };
///
/// let text = agreement.to_string();
/// assert!(text.contains("Check out date: 07/02/20"));
/// assert!(text.contains("Final charge: $3.58"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The rented tool's code.
    pub tool_code: String,
    /// Display name of the tool's type.
    pub tool_type: String,
    /// The rented tool's brand.
    pub tool_brand: String,
    /// Number of calendar days rented.
    pub rental_days: u32,
    /// The day the tool leaves the store.
    pub checkout_date: NaiveDate,
    /// The day the tool is due back.
    pub due_date: NaiveDate,
    /// Charge per billable day for the tool's type.
    pub daily_rental_charge: Decimal,
    /// Number of billable days between checkout and due date.
    pub charge_days: u32,
    /// `charge_days * daily_rental_charge`, rounded half up to cents.
    pub pre_discount_charge: Decimal,
    /// Discount percentage in `0..=100`.
    pub discount_percent: u32,
    /// Discount on the pre-discount charge, rounded half up to cents.
    pub discount_amount: Decimal,
    /// `pre_discount_charge - discount_amount`.
    pub final_charge: Decimal,
}

impl std::fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tool code: {}", self.tool_code)?;
        writeln!(f, "Tool type: {}", self.tool_type)?;
        writeln!(f, "Tool brand: {}", self.tool_brand)?;
        writeln!(f, "Rental days: {}", self.rental_days)?;
        writeln!(f, "Check out date: {}", format_date(self.checkout_date))?;
        writeln!(f, "Due date: {}", format_date(self.due_date))?;
        writeln!(
            f,
            "Daily rental charge: {}",
            format_currency(self.daily_rental_charge)
        )?;
        writeln!(f, "Charge days: {}", self.charge_days)?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_currency(self.pre_discount_charge)
        )?;
        writeln!(f, "Discount percent: {}%", self.discount_percent)?;
        writeln!(
            f,
            "Discount amount: {}",
            format_currency(self.discount_amount)
        )?;
        write!(f, "Final charge: {}", format_currency(self.final_charge))
    }
}

/// Formats a date as `MM/DD/YY`.
fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

/// Formats an amount as `$9,999.99`.
fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
