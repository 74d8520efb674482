//! Incentive Rules
//!
//! One rule per [`IncentiveType`]. Every rule is a pure function of its
//! inputs and re-checks eligibility itself, so each can be called directly
//! without going through [`dispatch`].
//!
//! Inputs are optional: a missing rebate, product or request is an ordinary
//! ineligibility outcome, never a fault.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    incentives::IncentiveType, products::Product, rebates::Rebate,
    requests::CalculateRebateRequest, results::RebateResult,
};

pub mod amount_per_uom;
pub mod fixed_cash_amount;
pub mod fixed_rate_rebate;

pub use amount_per_uom::amount_per_uom;
pub use fixed_cash_amount::fixed_cash_amount;
pub use fixed_rate_rebate::fixed_rate_rebate;

/// Why a rule declined to produce a rebate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    /// No rebate was supplied.
    #[error("rebate missing")]
    MissingRebate,

    /// No product was supplied.
    #[error("product missing")]
    MissingProduct,

    /// No request was supplied.
    #[error("request missing")]
    MissingRequest,

    /// The rebate has no incentive type configured.
    #[error("no incentive configured")]
    NoIncentive,

    /// The product does not accept the rule's incentive type.
    #[error("product does not support {0}")]
    Unsupported(IncentiveType),

    /// The rebate amount is zero.
    #[error("rebate amount is zero")]
    ZeroAmount,

    /// The rebate percentage is zero.
    #[error("rebate percentage is zero")]
    ZeroPercentage,

    /// The product price is zero.
    #[error("product price is zero")]
    ZeroPrice,

    /// The requested volume is zero.
    #[error("volume is zero")]
    ZeroVolume,

    /// The calculated amount does not fit in a decimal.
    #[error("amount overflowed")]
    Overflow,

    /// The calculated amount is below the smallest representable decimal.
    #[error("amount rounded to zero")]
    Underflow,
}

/// Calculate a rebate using the rule selected by the rebate's incentive type.
///
/// Returns an ineligible result without running any rule when the rebate is
/// missing or has no incentive type.
pub fn dispatch(
    rebate: Option<&Rebate>,
    product: Option<&Product>,
    request: Option<&CalculateRebateRequest>,
) -> RebateResult {
    let Some(configured) = rebate else {
        return declined(None, Ineligibility::MissingRebate);
    };

    let Some(incentive) = configured.incentive else {
        return declined(None, Ineligibility::NoIncentive);
    };

    match incentive {
        IncentiveType::FixedCashAmount => fixed_cash_amount(rebate, product),
        IncentiveType::FixedRateRebate => fixed_rate_rebate(rebate, product, request),
        IncentiveType::AmountPerUom => amount_per_uom(rebate, product, request),
    }
}

/// Require the product to accept `incentive`.
fn require_supported(product: &Product, incentive: IncentiveType) -> Result<(), Ineligibility> {
    if product.supports(incentive) {
        Ok(())
    } else {
        Err(Ineligibility::Unsupported(incentive))
    }
}

/// Require `value` to be non-zero, failing with `reason`.
fn require_non_zero(value: Decimal, reason: Ineligibility) -> Result<(), Ineligibility> {
    if value.is_zero() { Err(reason) } else { Ok(()) }
}

/// Require a calculated amount to have been representable and non-zero.
fn require_amount(amount: Option<Decimal>) -> Result<Decimal, Ineligibility> {
    let amount = amount.ok_or(Ineligibility::Overflow)?;

    require_non_zero(amount, Ineligibility::Underflow)?;

    Ok(amount)
}

/// Turn a rule outcome into a result, logging the reason for a decline.
fn conclude(incentive: IncentiveType, outcome: Result<Decimal, Ineligibility>) -> RebateResult {
    match outcome {
        Ok(amount) => RebateResult::success(amount),
        Err(reason) => declined(Some(incentive), reason),
    }
}

fn declined(incentive: Option<IncentiveType>, reason: Ineligibility) -> RebateResult {
    debug!(
        incentive = incentive.map_or("none", IncentiveType::as_str),
        %reason,
        "rebate ineligible"
    );

    RebateResult::ineligible()
}

#[cfg(test)]
pub(crate) mod test_support {
    use rust_decimal::Decimal;

    use crate::{
        incentives::IncentiveType, products::Product, rebates::Rebate,
        requests::CalculateRebateRequest,
    };

    pub(crate) fn rebate(incentive: IncentiveType) -> Rebate {
        Rebate::new("rebate-1")
            .with_incentive(incentive)
            .with_amount(Decimal::new(500, 2))
            .with_percentage(Decimal::new(10, 2))
    }

    pub(crate) fn product(supported: IncentiveType) -> Product {
        Product::new("product-1", Decimal::new(2000, 2)).with_supported(supported)
    }

    pub(crate) fn request(volume: i64) -> CalculateRebateRequest {
        CalculateRebateRequest::new("rebate-1", "product-1", Decimal::from(volume))
    }
}

#[cfg(test)]
mod tests {
    use super::{test_support::*, *};

    #[test]
    fn dispatch_without_rebate_is_ineligible() {
        let product = product(IncentiveType::FixedCashAmount);

        let result = dispatch(None, Some(&product), Some(&request(1)));

        assert_eq!(result, RebateResult::ineligible());
    }

    #[test]
    fn dispatch_without_incentive_is_ineligible() {
        let rebate = Rebate::new("rebate-1").with_amount(Decimal::TEN);
        let product = Product::new("product-1", Decimal::TEN)
            .with_supported(crate::incentives::SupportedIncentives::all());

        let result = dispatch(Some(&rebate), Some(&product), Some(&request(1)));

        assert_eq!(result, RebateResult::ineligible());
    }

    #[test]
    fn dispatch_selects_fixed_cash_amount() {
        let rebate = rebate(IncentiveType::FixedCashAmount);
        let product = product(IncentiveType::FixedCashAmount);

        let result = dispatch(Some(&rebate), Some(&product), Some(&request(3)));

        // Volume does not scale a fixed cash rebate.
        assert_eq!(result, RebateResult::success(Decimal::new(500, 2)));
    }

    #[test]
    fn dispatch_selects_fixed_rate_rebate() {
        let rebate = rebate(IncentiveType::FixedRateRebate);
        let product = product(IncentiveType::FixedRateRebate);

        let result = dispatch(Some(&rebate), Some(&product), Some(&request(5)));

        assert_eq!(result, RebateResult::success(Decimal::TEN));
    }

    #[test]
    fn dispatch_selects_amount_per_uom() {
        let rebate = rebate(IncentiveType::AmountPerUom);
        let product = product(IncentiveType::AmountPerUom);

        let result = dispatch(Some(&rebate), Some(&product), Some(&request(10)));

        assert_eq!(result, RebateResult::success(Decimal::new(50, 0)));
    }

    #[test]
    fn dispatch_uses_rebate_incentive_not_product_support() {
        let rebate = rebate(IncentiveType::AmountPerUom);
        let product = product(IncentiveType::FixedCashAmount);

        let result = dispatch(Some(&rebate), Some(&product), Some(&request(10)));

        assert_eq!(result, RebateResult::ineligible());
    }

    #[test]
    fn ineligibility_reasons_render() {
        assert_eq!(
            Ineligibility::Unsupported(IncentiveType::AmountPerUom).to_string(),
            "product does not support amount_per_uom"
        );
        assert_eq!(Ineligibility::ZeroVolume.to_string(), "volume is zero");
        assert_eq!(
            Ineligibility::Underflow.to_string(),
            "amount rounded to zero"
        );
    }
}
