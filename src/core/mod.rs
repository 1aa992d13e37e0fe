//! Core module - unit conversion, cost calculation, and projection

mod calculator;
mod projection;
mod types;
mod units;

pub(crate) use calculator::{calculate, sum_total_costs, validate_api_calls};
pub(crate) use projection::project;
pub(crate) use types::{CostRow, ProjectionRow, UsageParameters};
pub(crate) use units::Unit;
