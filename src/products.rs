//! Products

use rust_decimal::Decimal;

use crate::incentives::{IncentiveType, SupportedIncentives};

/// Product
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    /// Lookup key
    pub identifier: String,

    /// Unit price
    pub price: Decimal,

    /// Incentive types this product accepts
    pub supported_incentives: SupportedIncentives,
}

impl Product {
    /// Create a product with the given identifier and price, supporting no incentives.
    pub fn new(identifier: impl Into<String>, price: Decimal) -> Self {
        Self {
            identifier: identifier.into(),
            price,
            supported_incentives: SupportedIncentives::empty(),
        }
    }

    /// Replace the supported incentive set.
    #[must_use]
    pub fn with_supported(mut self, supported: impl Into<SupportedIncentives>) -> Self {
        self.supported_incentives = supported.into();
        self
    }

    /// Whether this product accepts the given incentive type.
    pub fn supports(&self, incentive: IncentiveType) -> bool {
        self.supported_incentives.contains(incentive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_supports_nothing() {
        let product = Product::new("p-1", Decimal::new(2000, 2));

        assert!(IncentiveType::ALL.iter().all(|i| !product.supports(*i)));
    }

    #[test]
    fn supports_checks_membership() {
        let supported =
            SupportedIncentives::from(IncentiveType::FixedCashAmount) | IncentiveType::AmountPerUom;
        let product = Product::new("p-1", Decimal::ONE).with_supported(supported);

        assert!(product.supports(IncentiveType::FixedCashAmount));
        assert!(product.supports(IncentiveType::AmountPerUom));
        assert!(!product.supports(IncentiveType::FixedRateRebate));
    }
}
