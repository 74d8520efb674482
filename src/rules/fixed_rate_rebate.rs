//! Fixed Rate Rebate
//!
//! Pays a percentage of the product price for every unit purchased.

use rust_decimal::Decimal;

use crate::{
    incentives::IncentiveType,
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
    results::RebateResult,
    rules::{Ineligibility, conclude, require_amount, require_non_zero, require_supported},
};

/// Calculate a fixed rate rebate: `price * percentage * volume`.
///
/// Eligible when the product supports [`IncentiveType::FixedRateRebate`] and
/// the percentage, price and volume are all non-zero.
pub fn fixed_rate_rebate(
    rebate: Option<&Rebate>,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> RebateResult {
    conclude(
        IncentiveType::FixedRateRebate,
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

    require_supported(product, IncentiveType::FixedRateRebate)?;
    require_non_zero(rebate.percentage, Ineligibility::ZeroPercentage)?;
    require_non_zero(product.price, Ineligibility::ZeroPrice)?;
    require_non_zero(request.volume, Ineligibility::ZeroVolume)?;

    let amount = product
        .price
        .checked_mul(rebate.percentage)
        .and_then(|per_unit| per_unit.checked_mul(request.volume));

    require_amount(amount)
}
