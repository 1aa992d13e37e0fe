use comfy_table::{Cell, Color, Table};

use crate::core::{CostRow, ProjectionRow, UsageParameters, sum_total_costs};
use crate::output::format::{
    NumberFormat, create_styled_table, format_compact, format_cost, format_number, header_cell,
    right_cell, styled_cell,
};
use crate::pricing::PricingTable;

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
}

impl TableOptions {
    fn cost_color(&self) -> Option<Color> {
        if self.use_color { Some(Color::Green) } else { None }
    }

    fn total_color(&self) -> Option<Color> {
        if self.use_color { Some(Color::Cyan) } else { None }
    }

    fn count(&self, n: u64) -> String {
        if self.compact {
            format_compact(n, self.number_format)
        } else {
            format_number(n, self.number_format)
        }
    }
}

fn cost_header(opts: &TableOptions) -> Vec<Cell> {
    let c = opts.use_color;
    if opts.compact {
        vec![
            header_cell("Model", c),
            header_cell("Per Call", c),
            header_cell("Total", c),
        ]
    } else {
        vec![
            header_cell("Provider", c),
            header_cell("Model", c),
            header_cell("Context", c),
            header_cell("Input/1k", c),
            header_cell("Output/1k", c),
            header_cell("Per Call", c),
            header_cell("Total", c),
        ]
    }
}

fn add_cost_row(table: &mut Table, row: &CostRow<'_>, opts: &TableOptions) {
    let nf = opts.number_format;
    let green = opts.cost_color();
    let entry = row.entry;
    if opts.compact {
        table.add_row(vec![
            Cell::new(&entry.model),
            right_cell(&format_cost(row.per_call_cost, 4, nf), None, false),
            right_cell(&format_cost(row.total_cost, 2, nf), green, false),
        ]);
    } else {
        table.add_row(vec![
            Cell::new(&entry.provider),
            Cell::new(&entry.model),
            Cell::new(&entry.context_window),
            right_cell(&format_cost(entry.input_rate_per_1k, 5, nf), None, false),
            right_cell(&format_cost(entry.output_rate_per_1k, 5, nf), None, false),
            right_cell(&format_cost(row.per_call_cost, 4, nf), None, false),
            right_cell(&format_cost(row.total_cost, 2, nf), green, false),
        ]);
    }
}

fn add_cost_total_row(table: &mut Table, rows: &[CostRow<'_>], opts: &TableOptions) {
    let nf = opts.number_format;
    let cyan = opts.total_color();
    let per_call: f64 = rows.iter().map(|r| r.per_call_cost).sum();
    let total = sum_total_costs(rows);

    let mut row = vec![styled_cell("TOTAL", cyan, true)];
    if !opts.compact {
        row.extend([
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
            Cell::new(""),
        ]);
    }
    row.extend([
        right_cell(&format_cost(per_call, 4, nf), cyan, true),
        right_cell(&format_cost(total, 2, nf), opts.cost_color().or(cyan), true),
    ]);
    table.add_row(row);
}

/// Per-model cost table for one usage
pub(crate) fn print_cost_table(rows: &[CostRow<'_>], usage: &UsageParameters, opts: TableOptions) {
    let mut table = create_styled_table();
    table.set_header(cost_header(&opts));
    for row in rows {
        add_cost_row(&mut table, row, &opts);
    }
    add_cost_total_row(&mut table, rows, &opts);

    let nf = opts.number_format;
    println!(
        "\n  Pricing Calculations ({} input + {} output tokens, {} calls)\n",
        format_number(usage.input_tokens, nf),
        format_number(usage.output_tokens, nf),
        format_number(usage.api_calls, nf),
    );
    println!("{table}");
}

/// Month-by-month projection table
pub(crate) fn print_projection_table(rows: &[ProjectionRow], growth_rate: f64, opts: TableOptions) {
    let c = opts.use_color;
    let nf = opts.number_format;
    let green = opts.cost_color();

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Month", c),
        header_cell("API Calls", c),
        header_cell("Total Tokens", c),
        header_cell("Total Cost", c),
        header_cell("Cumulative Cost", c),
    ]);

    for row in rows {
        table.add_row(vec![
            right_cell(&row.month.to_string(), None, false),
            right_cell(&opts.count(row.api_calls), None, false),
            right_cell(&opts.count(row.total_tokens), None, false),
            right_cell(&format_cost(row.total_cost, 2, nf), None, false),
            right_cell(&format_cost(row.cumulative_cost, 2, nf), green, false),
        ]);
    }

    println!("\n  Cost Over Time\n");
    println!("{table}");

    if let Some(last) = rows.last() {
        println!(
            "\n  {} months at {}% monthly growth | cumulative {}\n",
            rows.len(),
            (growth_rate * 10_000.0).round() / 100.0,
            format_cost(last.cumulative_cost, 2, nf)
        );
    }
}

/// Raw pricing table
pub(crate) fn print_pricing_table(pricing: &PricingTable, opts: TableOptions) {
    let c = opts.use_color;
    let nf = opts.number_format;

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Provider", c),
        header_cell("Model", c),
        header_cell("Context", c),
        header_cell("Input/1k Tokens", c),
        header_cell("Output/1k Tokens", c),
    ]);
    for entry in pricing.entries() {
        table.add_row(vec![
            Cell::new(&entry.provider),
            Cell::new(&entry.model),
            Cell::new(&entry.context_window),
            right_cell(&format_cost(entry.input_rate_per_1k, 5, nf), None, false),
            right_cell(&format_cost(entry.output_rate_per_1k, 5, nf), None, false),
        ]);
    }

    println!("\n  LLM Pricing (USD)\n");
    println!("{table}");
    println!("\n  {} models\n", pricing.len());
}
