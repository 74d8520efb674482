//! Rebates
//!
//! Rebates calculates the monetary rebate owed on a product purchase. Each
//! rebate is configured with an incentive type (fixed cash amount, fixed rate
//! rebate, or amount per unit of measure) which selects the rule used to
//! compute it; a product lists the incentive types it accepts.

pub mod fixtures;
pub mod incentives;
pub mod observability;
pub mod prelude;
pub mod products;
pub mod rebates;
pub mod report;
pub mod requests;
pub mod results;
pub mod rules;
pub mod service;
pub mod stores;
