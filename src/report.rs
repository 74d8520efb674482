//! Report
//!
//! Tabular rendering of a single rebate calculation.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{requests::CalculateRebateRequest, results::RebateResult};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output could not be written.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

/// A calculation request together with its result.
#[derive(Debug, Clone, Copy)]
pub struct CalculationReport<'a> {
    request: &'a CalculateRebateRequest,
    result: RebateResult,
    currency: &'static Currency,
}

impl<'a> CalculationReport<'a> {
    /// Create a report, rendering amounts in `currency`.
    pub fn new(
        request: &'a CalculateRebateRequest,
        result: RebateResult,
        currency: &'static Currency,
    ) -> Self {
        Self {
            request,
            result,
            currency,
        }
    }

    /// The calculated amount as money in the report currency.
    pub fn amount(&self) -> Money<'static, Currency> {
        Money::from_decimal(self.result.amount(), self.currency)
    }

    /// Write the report as a table.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        let volume = self.request.volume.to_string();
        let success = self.result.is_success();
        let amount = self.amount().to_string();

        let mut builder = Builder::default();

        builder.push_record(["", "Rebate Calculation"]);
        builder.push_record(["Rebate", self.request.rebate_identifier.as_str()]);
        builder.push_record(["Product", self.request.product_identifier.as_str()]);
        builder.push_record(["Volume", volume.as_str()]);
        builder.push_record(["Success", if success { "yes" } else { "no" }]);
        builder.push_record(["Calculated Amount", amount.as_str()]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}
