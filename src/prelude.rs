//! Rebates prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{Fixture, FixtureError},
    incentives::{IncentiveType, ParseIncentiveError, SupportedIncentives},
    products::Product,
    rebates::Rebate,
    report::{CalculationReport, ReportError},
    requests::CalculateRebateRequest,
    results::RebateResult,
    rules::{Ineligibility, amount_per_uom, dispatch, fixed_cash_amount, fixed_rate_rebate},
    service::{RebateService, RebateServiceError},
    stores::{
        MemoryProductStore, MemoryRebateStore, ProductDataStore, RebateDataStore, StoreError,
        StoredCalculation,
    },
};
