//! Tool, tool type and charge policy models.
//!
//! A [`ToolType`] carries the daily rental charge and the [`ChargePolicy`]
//! shared by every [`Tool`] of that type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// Which kinds of day are billable for a tool.
///
/// The three flags are independent. Holiday status is always evaluated
/// before weekend status, so `charge_on_holiday` governs a holiday even when
/// it falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
/// use tool_rental::models::ChargePolicy;
///
/// let policy = ChargePolicy::new(true, false, true);
/// assert!(policy.charges(DayType::Weekday));
/// assert!(!policy.charges(DayType::Weekend));
/// assert!(policy.charges(DayType::Holiday));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// Whether non-holiday Monday to Friday days are billed.
    pub charge_on_weekday: bool,
    /// Whether non-holiday Saturdays and Sundays are billed.
    pub charge_on_weekend: bool,
    /// Whether observed holidays are billed.
    pub charge_on_holiday: bool,
}

impl ChargePolicy {
    /// Creates a policy from the three eligibility flags.
    pub const fn new(charge_on_weekday: bool, charge_on_weekend: bool, charge_on_holiday: bool) -> Self {
        Self {
            charge_on_weekday,
            charge_on_weekend,
            charge_on_holiday,
        }
    }

    /// A policy that bills every day of the rental window.
    pub const fn every_day() -> Self {
        Self::new(true, true, true)
    }

    /// Returns true if a day of the given type is billable under this policy.
    pub fn charges(&self, day_type: DayType) -> bool {
        match day_type {
            DayType::Holiday => self.charge_on_holiday,
            DayType::Weekend => self.charge_on_weekend,
            DayType::Weekday => self.charge_on_weekday,
        }
    }
}

/// A category of rentable tool with its pricing rules.
///
/// # Example
///
/// ```
/// use tool_rental::models::{ChargePolicy, ToolType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ladder = ToolType {
///     code: "ladder".to_string(),
///     name: "Ladder".to_string(),
///     daily_charge: Decimal::from_str("1.99").unwrap(),
///     policy: ChargePolicy::new(true, true, false),
/// };
/// assert_eq!(ladder.to_string(), "Ladder");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolType {
    /// Configuration key of the tool type (e.g., "ladder").
    pub code: String,
    /// Display name of the tool type (e.g., "Ladder").
    pub name: String,
    /// Charge per billable day.
    pub daily_charge: Decimal,
    /// Which days are billable.
    #[serde(flatten)]
    pub policy: ChargePolicy,
}

impl std::fmt::Display for ToolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single rentable tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique tool code (e.g., "LADW").
    pub code: String,
    /// The tool's type, which determines its pricing.
    pub tool_type: ToolType,
    /// Manufacturer brand (e.g., "Werner").
    pub brand: String,
}

impl Tool {
    /// Returns the charge policy of the tool's type.
    pub fn policy(&self) -> ChargePolicy {
        self.tool_type.policy
    }

    /// Returns the daily charge of the tool's type.
    pub fn daily_charge(&self) -> Decimal {
        self.tool_type.daily_charge
    }
}
