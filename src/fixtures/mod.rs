//! Fixtures
//!
//! Loads a catalog of rebates and products from YAML into the in-memory
//! stores.
//!
//! ```yaml
//! currency: GBP
//! rebates:
//!   spring-cash:
//!     incentive: fixed_cash_amount
//!     amount: "10.00"
//! products:
//!   widget:
//!     price: "20.00"
//!     supported_incentives: [fixed_cash_amount]
//! ```

use std::{fs, path::Path, str::FromStr};

use rustc_hash::FxHashMap;
use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    fixtures::{products::ProductFixture, rebates::RebateFixture},
    incentives::ParseIncentiveError,
    products::Product,
    rebates::Rebate,
    stores::{MemoryProductStore, MemoryRebateStore},
};

pub mod products;
pub mod rebates;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount or price
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid percentage format or range
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Unknown incentive type name
    #[error(transparent)]
    UnknownIncentive(#[from] ParseIncentiveError),
}

/// Catalog file layout
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFixture {
    /// Display currency code; defaults to GBP
    #[serde(default)]
    currency: Option<String>,

    /// Map of rebate identifier -> rebate fixture
    #[serde(default)]
    rebates: FxHashMap<String, RebateFixture>,

    /// Map of product identifier -> product fixture
    #[serde(default)]
    products: FxHashMap<String, ProductFixture>,
}

/// A loaded catalog of rebates and products.
#[derive(Debug, Clone)]
pub struct Fixture {
    currency: &'static Currency,
    rebates: Vec<Rebate>,
    products: Vec<Product>,
}

impl Fixture {
    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        contents.parse()
    }

    /// Display currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Rebates, ordered by identifier.
    pub fn rebates(&self) -> &[Rebate] {
        &self.rebates
    }

    /// Products, ordered by identifier.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Move the catalog into in-memory stores.
    pub fn into_stores(self) -> (MemoryRebateStore, MemoryProductStore) {
        (
            self.rebates.into_iter().collect(),
            self.products.into_iter().collect(),
        )
    }
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fixture: CatalogFixture = serde_norway::from_str(s)?;

        let currency = fixture
            .currency
            .as_deref()
            .map_or(Ok(iso::GBP), parse_currency)?;

        let mut rebates = fixture
            .rebates
            .into_iter()
            .map(|(identifier, rebate)| rebate.into_rebate(identifier))
            .collect::<Result<Vec<_>, _>>()?;

        let mut products = fixture
            .products
            .into_iter()
            .map(|(identifier, product)| product.into_product(identifier))
            .collect::<Result<Vec<_>, _>>()?;

        rebates.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        products.sort_by(|a, b| a.identifier.cmp(&b.identifier));

        Ok(Self {
            currency,
            rebates,
            products,
        })
    }
}

/// Parse an ISO currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes other than GBP, USD and EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(iso::GBP),
        "USD" => Ok(iso::USD),
        "EUR" => Ok(iso::EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}
