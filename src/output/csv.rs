use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::core::ProjectionRow;
use crate::error::AppError;
use crate::output::format::{NumberFormat, format_number};

const PROJECTION_HEADER: &str =
    "Month,API Calls,Total Tokens,Total Cost (USD),Cumulative Cost (USD)";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Projection as CSV: grouped integers for calls/tokens, two decimals for costs.
pub(crate) fn output_projection_csv(rows: &[ProjectionRow]) -> String {
    let nf = NumberFormat::default();
    let mut out = String::new();
    out.push_str(PROJECTION_HEADER);
    out.push('\n');

    for row in rows {
        let _ = write!(
            out,
            "{},{},{},{:.2},{:.2}",
            row.month,
            csv_escape(&format_number(row.api_calls, nf)),
            csv_escape(&format_number(row.total_tokens, nf)),
            row.total_cost,
            row.cumulative_cost,
        );
        out.push('\n');
    }

    out
}

pub(crate) fn write_projection_csv(path: &Path, rows: &[ProjectionRow]) -> Result<(), AppError> {
    fs::write(path, output_projection_csv(rows)).map_err(|source| AppError::Export {
        path: path.to_path_buf(),
        source,
    })
}
