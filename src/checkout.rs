//! Checkout workflow.
//!
//! Validates the customer-facing checkout parameters, looks the tool up in
//! the catalog, counts chargeable days and prices the resulting
//! [`RentalAgreement`].

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::{calculate_charge, get_rental_period};
use crate::config::ToolCatalog;
use crate::error::{RentalError, RentalResult};
use crate::models::RentalAgreement;

/// Checks out a tool and produces the priced rental agreement.
///
/// # Arguments
///
/// * `catalog` - The catalog to look `tool_code` up in
/// * `tool_code` - Code of the tool being rented (e.g., "LADW")
/// * `rental_days` - Number of days rented; must be at least 1
/// * `discount_percent` - Whole-number discount in `0..=100`
/// * `checkout_date` - The day the tool leaves the store
///
/// # Errors
///
/// Validation happens in this order, before any calculation:
/// - [`RentalError::InvalidRentalDays`] if `rental_days` is less than 1
/// - [`RentalError::InvalidDiscountPercent`] if `discount_percent` is outside `0..=100`
/// - [`RentalError::ToolNotFound`] if the tool code is not in the catalog
///
/// # Example
///
/// ```
/// use tool_rental::checkout::checkout;
/// use tool_rental::config::ToolCatalog;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let catalog = ToolCatalog::standard();
/// let checkout_date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let agreement = checkout(&catalog, "LADW", 3, 10, checkout_date).unwrap();
///
/// assert_eq!(agreement.charge_days, 2);
/// assert_eq!(agreement.final_charge, Decimal::new(358, 2));
/// ```
pub fn checkout(
    catalog: &ToolCatalog,
    tool_code: &str,
    rental_days: i64,
    discount_percent: i64,
    checkout_date: NaiveDate,
) -> RentalResult<RentalAgreement> {
    if rental_days <= 0 {
        return Err(RentalError::InvalidRentalDays { rental_days });
    }
    let discount = u32::try_from(discount_percent)
        .ok()
        .filter(|percent| *percent <= 100)
        .ok_or(RentalError::InvalidDiscountPercent { discount_percent })?;

    let tool = catalog
        .get_tool(tool_code)
        .ok_or_else(|| RentalError::ToolNotFound {
            code: tool_code.to_string(),
        })?;

    debug!(
        tool = %tool_code,
        rental_days,
        discount_percent,
        checkout_date = %checkout_date,
        "Checkout requested"
    );

    let period = get_rental_period(Some(checkout_date), rental_days, tool.policy())?;
    let charge = calculate_charge(period.charge_days(), tool.daily_charge(), discount);

    Ok(RentalAgreement {
        tool_code: tool.code.clone(),
        tool_type: tool.tool_type.name.clone(),
        tool_brand: tool.brand.clone(),
        rental_days: period.rental_days(),
        checkout_date: period.checkout_date(),
        due_date: period.return_date(),
        daily_rental_charge: tool.daily_charge(),
        charge_days: period.charge_days(),
        pre_discount_charge: charge.pre_discount_charge,
        discount_percent: discount,
        discount_amount: charge.discount_amount,
        final_charge: charge.final_charge,
    })
}
