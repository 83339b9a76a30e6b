//! Rental charge calculation.
//!
//! Monetary amounts are rounded half up to whole cents at each step, so the
//! pre-discount charge and the discount amount are both exact cent values
//! and the final charge is their difference.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The priced components of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalCharge {
    /// `charge_days * daily_charge`, rounded to cents.
    pub pre_discount_charge: Decimal,
    /// `pre_discount_charge * discount_percent / 100`, rounded to cents.
    pub discount_amount: Decimal,
    /// `pre_discount_charge - discount_amount`.
    pub final_charge: Decimal,
}

/// Rounds an amount half up to whole cents.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_to_cents(dec("1.495")), dec("1.50"));
/// assert_eq!(round_to_cents(dec("1.1175")), dec("1.12"));
/// ```
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Prices a rental from its chargeable days, daily charge and discount.
///
/// `discount_percent` is expected to be in `0..=100`; range checks belong to
/// the checkout workflow.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::calculate_charge;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let charge = calculate_charge(2, Decimal::from_str("1.99").unwrap(), 10);
/// assert_eq!(charge.pre_discount_charge, Decimal::from_str("3.98").unwrap());
/// assert_eq!(charge.discount_amount, Decimal::from_str("0.40").unwrap());
/// assert_eq!(charge.final_charge, Decimal::from_str("3.58").unwrap());
/// ```
pub fn calculate_charge(
    charge_days: u32,
    daily_charge: Decimal,
    discount_percent: u32,
) -> RentalCharge {
    let pre_discount_charge = round_to_cents(Decimal::from(charge_days) * daily_charge);
    let discount_rate = Decimal::from(discount_percent) / Decimal::ONE_HUNDRED;
    let discount_amount = round_to_cents(pre_discount_charge * discount_rate);

    RentalCharge {
        pre_discount_charge,
        discount_amount,
        final_charge: pre_discount_charge - discount_amount,
    }
}
