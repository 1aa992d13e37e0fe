//! Month-by-month cost projection
//!
//! Call volume compounds once per month starting with month 2. Each step
//! truncates the grown volume back to an integer, so small bases with low
//! rates can plateau and results differ from `calls * (1 + g)^n`.

use crate::error::CostError;
use crate::pricing::PricingEntry;

use super::types::{ProjectionRow, UsageParameters};

/// Project costs over `months`, growing `usage.api_calls` by `growth_rate`
/// (a fraction in `[0, 1]`) each month after the first.
pub(crate) fn project(
    pricing: &[PricingEntry],
    usage: &UsageParameters,
    months: u32,
    growth_rate: f64,
) -> Result<Vec<ProjectionRow>, CostError> {
    if months == 0 {
        return Err(CostError::InvalidMonths);
    }
    if !(0.0..=1.0).contains(&growth_rate) {
        return Err(CostError::InvalidGrowthRate(growth_rate));
    }

    let total_tokens = usage.total_tokens();
    let mut current_calls = usage.api_calls;
    let mut cumulative_cost = 0.0;
    let mut rows = Vec::with_capacity(months as usize);

    for month in 1..=months {
        if growth_rate > 0.0 && month > 1 {
            current_calls = grow(current_calls, growth_rate);
        }

        let total_cost: f64 = pricing
            .iter()
            .map(|entry| {
                entry.per_call_cost(usage.input_tokens, usage.output_tokens) * current_calls as f64
            })
            .sum();
        cumulative_cost += total_cost;

        rows.push(ProjectionRow {
            month,
            api_calls: current_calls,
            total_tokens,
            total_cost,
            cumulative_cost,
        });
    }

    Ok(rows)
}

fn grow(calls: u64, growth_rate: f64) -> u64 {
    (calls as f64 * (1.0 + growth_rate)).floor() as u64
}
