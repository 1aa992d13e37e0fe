mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::write_projection_csv;
pub(crate) use format::{NumberFormat, format_number};
pub(crate) use json::{output_calculation_json, output_pricing_json};
pub(crate) use table::{TableOptions, print_cost_table, print_pricing_table, print_projection_table};
