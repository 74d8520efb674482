//! Calculation Requests

use rust_decimal::Decimal;

/// A request to calculate the rebate for a purchase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculateRebateRequest {
    /// Rebate lookup key
    pub rebate_identifier: String,

    /// Product lookup key
    pub product_identifier: String,

    /// Quantity purchased
    pub volume: Decimal,
}

impl CalculateRebateRequest {
    /// Create a new request.
    pub fn new(
        rebate_identifier: impl Into<String>,
        product_identifier: impl Into<String>,
        volume: Decimal,
    ) -> Self {
        Self {
            rebate_identifier: rebate_identifier.into(),
            product_identifier: product_identifier.into(),
            volume,
        }
    }

    /// A request carrying only a volume, for calling the rules directly.
    pub fn with_volume(volume: Decimal) -> Self {
        Self {
            volume,
            ..Self::default()
        }
    }
}
