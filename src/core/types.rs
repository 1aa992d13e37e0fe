//! Engine data types
//!
//! Inputs are plain integers; outputs keep full floating-point precision.
//! Rounding is left to the output layer.

use serde::Serialize;

use crate::error::CostError;
use crate::pricing::PricingEntry;

use super::units::{Unit, convert};

/// Normalized usage for one calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct UsageParameters {
    pub(crate) input_tokens: u64,
    pub(crate) output_tokens: u64,
    pub(crate) api_calls: u64,
}

impl UsageParameters {
    /// Build usage from raw amounts expressed in `unit`.
    ///
    /// Fails when a conversion is out of range or when input plus output
    /// tokens would not fit in a `u64`.
    pub(crate) fn from_amounts(
        input_amount: u64,
        output_amount: u64,
        api_calls: u64,
        unit: Unit,
    ) -> Result<Self, CostError> {
        let input_tokens = convert(input_amount, unit)?;
        let output_tokens = convert(output_amount, unit)?;
        if input_tokens.checked_add(output_tokens).is_none() {
            return Err(CostError::TokenOverflow {
                input: input_tokens,
                output: output_tokens,
            });
        }
        Ok(Self {
            input_tokens,
            output_tokens,
            api_calls,
        })
    }

    /// Saturates for values not built through [`UsageParameters::from_amounts`]
    pub(crate) fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Cost of one pricing entry for a given usage
#[derive(Debug, Clone, Copy)]
pub(crate) struct CostRow<'a> {
    pub(crate) entry: &'a PricingEntry,
    pub(crate) per_call_cost: f64,
    /// Always `per_call_cost * api_calls`
    pub(crate) total_cost: f64,
}

/// One month of a cost projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ProjectionRow {
    /// 1-based
    pub(crate) month: u32,
    pub(crate) api_calls: u64,
    pub(crate) total_tokens: u64,
    /// Sum across all pricing entries for this month
    pub(crate) total_cost: f64,
    pub(crate) cumulative_cost: f64,
}
