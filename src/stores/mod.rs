//! Stores
//!
//! Lookup and persistence ports used by the calculation engine, plus
//! in-memory adapters.
//!
//! A lookup that finds nothing returns `Ok(None)`; `Err` is reserved for a
//! store that cannot answer at all.

use mockall::automock;
use rust_decimal::Decimal;

use crate::{products::Product, rebates::Rebate};

pub mod errors;
pub mod memory;

pub use errors::StoreError;
pub use memory::{MemoryProductStore, MemoryRebateStore, StoredCalculation};

/// Rebate lookup and calculation persistence.
#[automock]
pub trait RebateDataStore: Send + Sync {
    /// Retrieve a rebate by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot be read.
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError>;

    /// Record the amount calculated for a rebate.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the result cannot be written.
    fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<(), StoreError>;
}

/// Product lookup.
#[automock]
pub trait ProductDataStore: Send + Sync {
    /// Retrieve a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot be read.
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError>;
}

impl<T: RebateDataStore + ?Sized> RebateDataStore for &T {
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        (**self).get_rebate(identifier)
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<(), StoreError> {
        (**self).store_calculation_result(rebate, amount)
    }
}

impl<T: ProductDataStore + ?Sized> ProductDataStore for &T {
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        (**self).get_product(identifier)
    }
}
