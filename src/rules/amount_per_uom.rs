//! Amount Per Unit of Measure
//!
//! Pays the rebate's configured amount for every unit purchased.

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType,
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
    results::RebateResult,
    rules::{Ineligibility, conclude, require_amount, require_non_zero, require_supported},
};

/// Calculate an amount-per-unit rebate: `amount * volume`.
///
/// Eligible when the product supports [`IncentiveType::AmountPerUom`] and the
/// rebate amount and volume are non-zero.
pub fn amount_per_uom(
    rebate: Option<&Rebate>,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> RebateResult {
    conclude(
        IncentiveType::AmountPerUom,
        evaluate(rebate, product, request),
    )
}

fn evaluate(
    rebate: Option<&Rebate>,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> Result<Decimal, Ineligibility> {
    let rebate = rebate.ok_or(Ineligibility::MissingRebate)?;
    let product = product.ok_or(Ineligibility::MissingProduct)?;
    let request = request.ok_or(Ineligibility::MissingRequest)?;

    require_supported(product, IncentiveType::AmountPerUom)?;
    require_non_zero(rebate.amount, Ineligibility::ZeroAmount)?;
    require_non_zero(request.volume, Ineligibility::ZeroVolume)?;

    require_amount(rebate.amount.checked_mul(request.volume))
}
