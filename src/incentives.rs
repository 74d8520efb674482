//! Incentives
//!
//! The incentive type configured on a rebate, and the set of incentive types
//! a product accepts.

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

use thiserror::Error;

/// Error returned when an incentive name is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown incentive type: {0}")]
pub struct ParseIncentiveError(pub String);

/// The rule governing how a rebate's monetary value is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncentiveType {
    /// A fixed cash amount, independent of price and volume.
    FixedCashAmount,

    /// A percentage of the product price, per unit purchased.
    FixedRateRebate,

    /// A fixed amount per unit of measure purchased.
    AmountPerUom,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
    ];

    /// Snake-case name, as used in catalog files.
    pub const fn as_str(self) -> &'static str {
        match self {
            IncentiveType::FixedCashAmount => "fixed_cash_amount",
            IncentiveType::FixedRateRebate => "fixed_rate_rebate",
            IncentiveType::AmountPerUom => "amount_per_uom",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            IncentiveType::FixedCashAmount => 1,
            IncentiveType::FixedRateRebate => 1 << 1,
            IncentiveType::AmountPerUom => 1 << 2,
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncentiveType {
    type Err = ParseIncentiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fixed_cash_amount" | "FixedCashAmount" => Ok(IncentiveType::FixedCashAmount),
            "fixed_rate_rebate" | "FixedRateRebate" => Ok(IncentiveType::FixedRateRebate),
            "amount_per_uom" | "AmountPerUom" => Ok(IncentiveType::AmountPerUom),
            other => Err(ParseIncentiveError(other.to_string())),
        }
    }
}

/// Set of incentive types a product accepts.
///
/// Stored as a bitset; a product may support any combination of incentive types.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SupportedIncentives {
    bits: u8,
}

impl SupportedIncentives {
    /// A set that supports no incentive type.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// A set that supports every incentive type.
    pub const fn all() -> Self {
        Self::empty()
            .with(IncentiveType::FixedCashAmount)
            .with(IncentiveType::FixedRateRebate)
            .with(IncentiveType::AmountPerUom)
    }

    /// Returns a copy of this set with `incentive` added.
    #[must_use]
    pub const fn with(self, incentive: IncentiveType) -> Self {
        Self {
            bits: self.bits | incentive.bit(),
        }
    }

    /// Add an incentive type to the set.
    pub fn insert(&mut self, incentive: IncentiveType) {
        self.bits |= incentive.bit();
    }

    /// Remove an incentive type from the set.
    pub fn remove(&mut self, incentive: IncentiveType) {
        self.bits &= !incentive.bit();
    }

    /// Whether `incentive` is a member of the set.
    pub const fn contains(self, incentive: IncentiveType) -> bool {
        self.bits & incentive.bit() != 0
    }

    /// Whether the set has no members.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterate over the members of the set in declaration order.
    pub fn iter(self) -> impl Iterator<Item = IncentiveType> {
        IncentiveType::ALL
            .into_iter()
            .filter(move |incentive| self.contains(*incentive))
    }
}

impl fmt::Debug for SupportedIncentives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        Self::empty().with(incentive)
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl BitOr for SupportedIncentives {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOr<IncentiveType> for SupportedIncentives {
    type Output = Self;

    fn bitor(self, rhs: IncentiveType) -> Self::Output {
        self.with(rhs)
    }
}

impl BitOrAssign<IncentiveType> for SupportedIncentives {
    fn bitor_assign(&mut self, rhs: IncentiveType) {
        self.insert(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_contains_nothing() {
        let set = SupportedIncentives::empty();

        assert!(set.is_empty());
        assert!(IncentiveType::ALL.iter().all(|i| !set.contains(*i)));
    }

    #[test]
    fn all_contains_everything() {
        let set = SupportedIncentives::all();

        assert!(IncentiveType::ALL.iter().all(|i| set.contains(*i)));
    }

    #[test]
    fn single_flag_membership() {
        let set = SupportedIncentives::from(IncentiveType::AmountPerUom);

        assert!(set.contains(IncentiveType::AmountPerUom));
        assert!(!set.contains(IncentiveType::FixedCashAmount));
        assert!(!set.contains(IncentiveType::FixedRateRebate));
    }

    #[test]
    fn multiple_flags_can_be_combined() {
        let set = SupportedIncentives::from(IncentiveType::FixedCashAmount)
            | IncentiveType::FixedRateRebate;

        assert!(set.contains(IncentiveType::FixedCashAmount));
        assert!(set.contains(IncentiveType::FixedRateRebate));
        assert!(!set.contains(IncentiveType::AmountPerUom));
    }

    #[test]
    fn insert_and_remove() {
        let mut set = SupportedIncentives::empty();

        set |= IncentiveType::FixedRateRebate;
        assert!(set.contains(IncentiveType::FixedRateRebate));

        set.remove(IncentiveType::FixedRateRebate);
        assert!(set.is_empty());
    }

    #[test]
    fn collects_from_iterator() {
        let set: SupportedIncentives = [
            IncentiveType::AmountPerUom,
            IncentiveType::FixedCashAmount,
        ]
        .into_iter()
        .collect();

        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![IncentiveType::FixedCashAmount, IncentiveType::AmountPerUom]
        );
    }

    #[test]
    fn parses_snake_and_pascal_case() -> Result<(), ParseIncentiveError> {
        assert_eq!(
            "fixed_rate_rebate".parse::<IncentiveType>()?,
            IncentiveType::FixedRateRebate
        );
        assert_eq!(
            "AmountPerUom".parse::<IncentiveType>()?,
            IncentiveType::AmountPerUom
        );

        Ok(())
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let result = "buy_one_get_one".parse::<IncentiveType>();

        assert_eq!(
            result,
            Err(ParseIncentiveError("buy_one_get_one".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() -> Result<(), ParseIncentiveError> {
        for incentive in IncentiveType::ALL {
            assert_eq!(incentive.to_string().parse::<IncentiveType>()?, incentive);
        }

        Ok(())
    }

    #[test]
    fn debug_lists_members() {
        let set = SupportedIncentives::from(IncentiveType::FixedCashAmount);

        assert_eq!(format!("{set:?}"), "{FixedCashAmount}");
    }
}
