use crate::error::CostError;
use crate::pricing::PricingEntry;

use super::types::{CostRow, UsageParameters};

/// Reject a call volume of zero before any computation happens.
pub(crate) fn validate_api_calls(api_calls: u64) -> Result<(), CostError> {
    if api_calls == 0 {
        return Err(CostError::ZeroApiCalls);
    }
    Ok(())
}

/// Per-call and total cost for every pricing entry, in table order.
pub(crate) fn calculate<'a>(
    pricing: &'a [PricingEntry],
    usage: &UsageParameters,
) -> Result<Vec<CostRow<'a>>, CostError> {
    validate_api_calls(usage.api_calls)?;

    let rows = pricing
        .iter()
        .map(|entry| {
            let per_call_cost = entry.per_call_cost(usage.input_tokens, usage.output_tokens);
            CostRow {
                entry,
                per_call_cost,
                total_cost: per_call_cost * usage.api_calls as f64,
            }
        })
        .collect();
    Ok(rows)
}

/// Sum of `total_cost` across rows
pub(crate) fn sum_total_costs(rows: &[CostRow<'_>]) -> f64 {
    rows.iter().map(|row| row.total_cost).sum()
}
