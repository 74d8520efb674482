//! Rebate Service
//!
//! End-to-end calculation: look up the rebate and product, run the rule for
//! the rebate's incentive type, and store a successful result.

use tracing::{Span, debug, info};

use crate::{
    products::Product,
    rebates::Rebate,
    requests::CalculateRebateRequest,
    results::RebateResult,
    rules,
    stores::{ProductDataStore, RebateDataStore},
};

pub mod errors;

pub use errors::RebateServiceError;

/// Rebate calculation engine.
///
/// Holds no state of its own beyond the stores it was built with. Storing
/// is not idempotent: calculating twice for the same request stores twice.
#[derive(Debug, Clone)]
pub struct RebateService<R, P> {
    rebates: R,
    products: P,
}

impl<R: RebateDataStore, P: ProductDataStore> RebateService<R, P> {
    /// Create a service over the given rebate and product stores.
    pub fn new(rebates: R, products: P) -> Self {
        Self { rebates, products }
    }

    /// The rebate store.
    pub fn rebates(&self) -> &R {
        &self.rebates
    }

    /// The product store.
    pub fn products(&self) -> &P {
        &self.products
    }

    /// Calculate the rebate for a request and store the amount when successful.
    ///
    /// Performs at most two reads and one write, in the order: rebate lookup,
    /// product lookup, store. A missing rebate or product yields an
    /// unsuccessful result and nothing is stored.
    ///
    /// # Errors
    ///
    /// - [`RebateServiceError::Lookup`]: a store could not be read.
    /// - [`RebateServiceError::Persistence`]: the calculated amount could not
    ///   be stored. The calculation is not undone.
    #[tracing::instrument(
        name = "rebates.service.calculate",
        skip(self, request),
        fields(
            rebate_identifier = %request.rebate_identifier,
            product_identifier = %request.product_identifier,
            volume = %request.volume,
            incentive = tracing::field::Empty,
            success = tracing::field::Empty,
            amount = tracing::field::Empty
        ),
        err
    )]
    pub fn calculate(
        &self,
        request: &CalculateRebateRequest,
    ) -> Result<RebateResult, RebateServiceError> {
        let rebate = self
            .rebates
            .get_rebate(&request.rebate_identifier)
            .map_err(RebateServiceError::Lookup)?;

        let product = self
            .products
            .get_product(&request.product_identifier)
            .map_err(RebateServiceError::Lookup)?;

        let (Some(rebate), Some(product)) = (rebate, product) else {
            debug!("rebate or product not found");

            return Ok(RebateResult::ineligible());
        };

        let span = Span::current();

        if let Some(incentive) = rebate.incentive {
            span.record("incentive", tracing::field::display(incentive));
        }

        let result = self.dispatch(Some(&rebate), Some(&product), Some(request));

        span.record("success", result.is_success());

        if !result.is_success() {
            return Ok(result);
        }

        span.record("amount", tracing::field::display(result.amount()));

        self.rebates
            .store_calculation_result(&rebate, result.amount())
            .map_err(RebateServiceError::Persistence)?;

        info!(
            rebate_identifier = %rebate.identifier,
            amount = %result.amount(),
            "stored rebate calculation"
        );

        Ok(result)
    }

    /// Run the rule for the rebate's incentive type, without touching the stores.
    pub fn dispatch(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
        request: Option<&CalculateRebateRequest>,
    ) -> RebateResult {
        rules::dispatch(rebate, product, request)
    }

    /// Calculate a fixed cash amount rebate. See [`rules::fixed_cash_amount()`].
    pub fn fixed_cash_amount(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
    ) -> RebateResult {
        rules::fixed_cash_amount(rebate, product)
    }

    /// Calculate a fixed rate rebate. See [`rules::fixed_rate_rebate()`].
    pub fn fixed_rate_rebate(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
        request: Option<&CalculateRebateRequest>,
    ) -> RebateResult {
        rules::fixed_rate_rebate(rebate, product, request)
    }

    /// Calculate an amount-per-unit rebate. See [`rules::amount_per_uom()`].
    pub fn amount_per_uom(
        &self,
        rebate: Option<&Rebate>,
        product: Option<&Product>,
        request: Option<&CalculateRebateRequest>,
    ) -> RebateResult {
        rules::amount_per_uom(rebate, product, request)
    }
}
