//! Fixed Cash Amount
//!
//! Pays the rebate's configured amount once, regardless of price or volume.

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType,
    products::Product,
    rebates::Rebate,
    results::RebateResult,
    rules::{Ineligibility, conclude, require_non_zero, require_supported},
};

/// Calculate a fixed cash amount rebate.
///
/// Eligible when the product supports [`IncentiveType::FixedCashAmount`] and
/// the rebate amount is non-zero.
pub fn fixed_cash_amount(rebate: Option<&Rebate>, product: Option<&Product>) -> RebateResult {
    conclude(IncentiveType::FixedCashAmount, evaluate(rebate, product))
}

fn evaluate(rebate: Option<&Rebate>, product: Option<&Product>) -> Result<Decimal, Ineligibility> {
    let rebate = rebate.ok_or(Ineligibility::MissingRebate)?;
    let product = product.ok_or(Ineligibility::MissingProduct)?;

    require_supported(product, IncentiveType::FixedCashAmount)?;
    require_non_zero(rebate.amount, Ineligibility::ZeroAmount)?;

    Ok(rebate.amount)
}
