//! Rebates

use rust_decimal::Decimal;

use crate::incentives::IncentiveType;

/// A configured rebate.
///
/// Owned by the rebate store; the calculation engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rebate {
    /// Lookup key
    pub identifier: String,

    /// Incentive type used to calculate the rebate, if one is configured
    pub incentive: Option<IncentiveType>,

    /// Cash amount, used by fixed cash and per-unit rebates
    pub amount: Decimal,

    /// Fraction of the product price, used by fixed rate rebates
    pub percentage: Decimal,
}

impl Rebate {
    /// Create an unconfigured rebate with the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Set the incentive type.
    #[must_use]
    pub fn with_incentive(mut self, incentive: IncentiveType) -> Self {
        self.incentive = Some(incentive);
        self
    }

    /// Set the cash amount.
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Set the percentage.
    #[must_use]
    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }
}
