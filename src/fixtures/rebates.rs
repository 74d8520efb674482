//! Rebate Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_amount},
    incentives::IncentiveType,
    rebates::Rebate,
};

/// Rebate Fixture
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RebateFixture {
    /// Incentive type name (e.g., `fixed_rate_rebate`); omitted for an unconfigured rebate
    #[serde(default)]
    pub incentive: Option<String>,

    /// Cash amount (e.g., "10.00")
    #[serde(default)]
    pub amount: Option<String>,

    /// Percentage of price (e.g., "10%" or "0.10")
    #[serde(default)]
    pub percentage: Option<String>,
}

impl RebateFixture {
    /// Build a [`Rebate`] with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the incentive, amount or percentage cannot be parsed.
    pub fn into_rebate(self, identifier: String) -> Result<Rebate, FixtureError> {
        let incentive = self
            .incentive
            .as_deref()
            .map(str::parse::<IncentiveType>)
            .transpose()?;
        let amount = self.amount.as_deref().map(parse_amount).transpose()?;
        let percentage = self
            .percentage
            .as_deref()
            .map(parse_percentage)
            .transpose()?;

        Ok(Rebate {
            identifier,
            incentive,
            amount: amount.unwrap_or_default(),
            percentage: percentage.unwrap_or_default(),
        })
    }
}

/// Parse percentage string (e.g., "15%" or "0.15") into a fraction.
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or the value lies outside 0% to 100%.
pub fn parse_percentage(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();

    let value = if let Some(percent_str) = trimmed.strip_suffix('%') {
        percent_str
            .trim()
            .parse::<Decimal>()
            .ok()
            .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
    } else {
        trimmed.parse::<Decimal>().ok()
    };

    value
        .filter(|value| (Decimal::ZERO..=Decimal::ONE).contains(value))
        .ok_or_else(|| FixtureError::InvalidPercentage(s.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_percentage_accepts_percentage_format() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("15%")?, Decimal::new(15, 2));

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_decimal_format() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("0.15")?, Decimal::new(15, 2));

        Ok(())
    }

    #[test]
    fn parse_percentage_accepts_bounds() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("100%")?, Decimal::ONE);
        assert_eq!(parse_percentage("0")?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn parse_percentage_handles_whitespace() -> Result<(), FixtureError> {
        assert_eq!(parse_percentage("  15 %  ")?, Decimal::new(15, 2));

        Ok(())
    }

    #[test]
    fn parse_percentage_rejects_out_of_range() {
        assert!(matches!(
            parse_percentage("150%"),
            Err(FixtureError::InvalidPercentage(_))
        ));
        assert!(matches!(
            parse_percentage("-0.1"),
            Err(FixtureError::InvalidPercentage(_))
        ));
    }

    #[test]
    fn parse_percentage_rejects_invalid_format() {
        let result = parse_percentage("invalid");

        assert!(matches!(result, Err(FixtureError::InvalidPercentage(_))));
    }

    #[test]
    fn into_rebate_defaults_missing_values_to_zero() -> TestResult {
        let fixture = RebateFixture {
            incentive: Some("amount_per_uom".to_string()),
            amount: None,
            percentage: None,
        };

        let rebate = fixture.into_rebate("r-1".to_string())?;

        assert_eq!(rebate.incentive, Some(IncentiveType::AmountPerUom));
        assert!(rebate.amount.is_zero());
        assert!(rebate.percentage.is_zero());

        Ok(())
    }

    #[test]
    fn into_rebate_rejects_unknown_incentive() {
        let fixture = RebateFixture {
            incentive: Some("bogof".to_string()),
            amount: None,
            percentage: None,
        };

        assert!(matches!(
            fixture.into_rebate("r-1".to_string()),
            Err(FixtureError::UnknownIncentive(_))
        ));
    }

    #[test]
    fn into_rebate_without_incentive_is_unconfigured() -> TestResult {
        let fixture = RebateFixture {
            incentive: None,
            amount: Some("5".to_string()),
            percentage: None,
        };

        let rebate = fixture.into_rebate("r-1".to_string())?;

        assert_eq!(rebate.incentive, None);
        assert_eq!(rebate.amount, Decimal::from(5));

        Ok(())
    }
}
