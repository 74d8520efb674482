//! Product Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    incentives::{IncentiveType, SupportedIncentives},
    products::Product,
};

/// Product Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductFixture {
    /// Unit price (e.g., "20.00")
    pub price: String,

    /// Incentive type names the product accepts
    #[serde(default)]
    pub supported_incentives: Vec<String>,
}

impl ProductFixture {
    /// Build a [`Product`] with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the price or an incentive name cannot be parsed.
    pub fn into_product(self, identifier: String) -> Result<Product, FixtureError> {
        let price = parse_amount(&self.price)?;

        let supported_incentives = self
            .supported_incentives
            .iter()
            .map(|name| name.parse::<IncentiveType>())
            .collect::<Result<SupportedIncentives, _>>()?;

        Ok(Product {
            identifier,
            price,
            supported_incentives,
        })
    }
}

/// Parse a non-negative decimal amount (e.g., "2.99").
///
/// # Errors
///
/// Returns [`FixtureError::InvalidAmount`] if the string is not a decimal or is negative.
pub fn parse_amount(s: &str) -> Result<Decimal, FixtureError> {
    s.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|amount| !amount.is_sign_negative())
        .ok_or_else(|| FixtureError::InvalidAmount(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_amount_accepts_decimal() -> Result<(), FixtureError> {
        assert_eq!(parse_amount("2.99")?, Decimal::new(299, 2));
        assert_eq!(parse_amount(" 10 ")?, Decimal::TEN);

        Ok(())
    }

    #[test]
    fn parse_amount_rejects_negative() {
        let result = parse_amount("-1.00");

        assert!(matches!(result, Err(FixtureError::InvalidAmount(s)) if s == "-1.00"));
    }

    #[test]
    fn parse_amount_rejects_invalid_format() {
        assert!(matches!(
            parse_amount("2.99 GBP"),
            Err(FixtureError::InvalidAmount(_))
        ));
    }

    #[test]
    fn into_product_collects_supported_incentives() -> TestResult {
        let fixture = ProductFixture {
            price: "20.00".to_string(),
            supported_incentives: vec!["fixed_rate_rebate".to_string(), "AmountPerUom".to_string()],
        };

        let product = fixture.into_product("p-1".to_string())?;

        assert_eq!(product.identifier, "p-1");
        assert_eq!(product.price, Decimal::new(2000, 2));
        assert!(product.supports(IncentiveType::FixedRateRebate));
        assert!(product.supports(IncentiveType::AmountPerUom));
        assert!(!product.supports(IncentiveType::FixedCashAmount));

        Ok(())
    }

    #[test]
    fn into_product_without_incentives_supports_nothing() -> TestResult {
        let fixture = ProductFixture {
            price: "1".to_string(),
            supported_incentives: Vec::new(),
        };

        let product = fixture.into_product("p-1".to_string())?;

        assert!(product.supported_incentives.is_empty());

        Ok(())
    }

    #[test]
    fn into_product_rejects_unknown_incentive() {
        let fixture = ProductFixture {
            price: "1".to_string(),
            supported_incentives: vec!["bogof".to_string()],
        };

        assert!(matches!(
            fixture.into_product("p-1".to_string()),
            Err(FixtureError::UnknownIncentive(_))
        ));
    }
}
