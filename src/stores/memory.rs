//! In-memory stores.

use std::sync::Mutex;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    products::Product,
    rebates::Rebate,
    stores::{ProductDataStore, RebateDataStore, StoreError},
};

/// A calculation recorded by [`MemoryRebateStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCalculation {
    /// Identifier of the rebate the amount was calculated for
    pub rebate_identifier: String,

    /// Calculated amount
    pub amount: Decimal,
}

/// Rebates held in memory, keyed by identifier.
///
/// Stored calculations are appended in call order; storing twice for the
/// same rebate records two entries.
#[derive(Debug, Default)]
pub struct MemoryRebateStore {
    rebates: FxHashMap<String, Rebate>,
    calculations: Mutex<Vec<StoredCalculation>>,
}

impl MemoryRebateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a rebate, keyed by its identifier.
    pub fn insert(&mut self, rebate: Rebate) -> Option<Rebate> {
        self.rebates.insert(rebate.identifier.clone(), rebate)
    }

    /// Number of rebates held.
    pub fn len(&self) -> usize {
        self.rebates.len()
    }

    /// Whether the store holds no rebates.
    pub fn is_empty(&self) -> bool {
        self.rebates.is_empty()
    }

    /// Calculations stored so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if a writer panicked while holding the lock.
    pub fn calculations(&self) -> Result<Vec<StoredCalculation>, StoreError> {
        let calculations = self
            .calculations
            .lock()
            .map_err(|_err| StoreError::Poisoned)?;

        Ok(calculations.clone())
    }
}

impl FromIterator<Rebate> for MemoryRebateStore {
    fn from_iter<I: IntoIterator<Item = Rebate>>(iter: I) -> Self {
        let mut store = Self::new();

        for rebate in iter {
            store.insert(rebate);
        }

        store
    }
}

impl RebateDataStore for MemoryRebateStore {
    fn get_rebate(&self, identifier: &str) -> Result<Option<Rebate>, StoreError> {
        Ok(self.rebates.get(identifier).cloned())
    }

    fn store_calculation_result(&self, rebate: &Rebate, amount: Decimal) -> Result<(), StoreError> {
        let mut calculations = self
            .calculations
            .lock()
            .map_err(|_err| StoreError::Poisoned)?;

        calculations.push(StoredCalculation {
            rebate_identifier: rebate.identifier.clone(),
            amount,
        });

        Ok(())
    }
}

/// Products held in memory, keyed by identifier.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: FxHashMap<String, Product>,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a product, keyed by its identifier.
    pub fn insert(&mut self, product: Product) -> Option<Product> {
        self.products.insert(product.identifier.clone(), product)
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for MemoryProductStore {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut store = Self::new();

        for product in iter {
            store.insert(product);
        }

        store
    }
}

impl ProductDataStore for MemoryProductStore {
    fn get_product(&self, identifier: &str) -> Result<Option<Product>, StoreError> {
        Ok(self.products.get(identifier).cloned())
    }
}
