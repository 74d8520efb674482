//! Rebate Results

use rust_decimal::Decimal;

/// Outcome of a rebate calculation.
///
/// An unsuccessful result always carries a zero amount; the only way to
/// obtain a non-zero amount is [`RebateResult::success`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebateResult {
    success: bool,
    amount: Decimal,
}

impl RebateResult {
    /// An unsuccessful, zero-amount result.
    pub const fn ineligible() -> Self {
        Self {
            success: false,
            amount: Decimal::ZERO,
        }
    }

    /// A successful result for the given amount.
    pub const fn success(amount: Decimal) -> Self {
        Self {
            success: true,
            amount,
        }
    }

    /// Whether a rebate was calculated.
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The calculated amount; zero when unsuccessful.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ineligible() {
        assert_eq!(RebateResult::default(), RebateResult::ineligible());
    }

    #[test]
    fn ineligible_has_zero_amount() {
        let result = RebateResult::ineligible();

        assert!(!result.is_success());
        assert!(result.amount().is_zero());
    }

    #[test]
    fn success_carries_amount() {
        let result = RebateResult::success(Decimal::new(1000, 2));

        assert!(result.is_success());
        assert_eq!(result.amount(), Decimal::TEN);
    }
}
