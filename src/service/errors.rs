//! Rebate service errors.

use thiserror::Error;

use crate::stores::StoreError;

/// Faults raised by [`RebateService::calculate`](crate::service::RebateService::calculate).
///
/// Ineligibility is not a fault; it is reported as an unsuccessful
/// [`RebateResult`](crate::results::RebateResult).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RebateServiceError {
    /// A rebate or product lookup could not be performed.
    #[error("lookup failed")]
    Lookup(#[source] StoreError),

    /// The calculated amount could not be stored.
    #[error("failed to store calculation result")]
    Persistence(#[source] StoreError),
}
