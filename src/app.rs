use std::path::Path;

use crate::cli::{Cli, Command, ProjectionSettings};
use crate::core::{ProjectionRow, Unit, UsageParameters, calculate, project};
use crate::error::AppError;
use crate::output::{
    NumberFormat, TableOptions, format_number, output_calculation_json, output_pricing_json,
    print_cost_table, print_pricing_table, print_projection_table, write_projection_csv,
};
use crate::pricing::PricingTable;
use crate::utils::debug_log;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) pricing: &'a PricingTable,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn table_options(&self) -> TableOptions {
        TableOptions {
            use_color: self.cli.use_color(),
            compact: self.cli.compact,
            number_format: self.number_format,
        }
    }
}

/// Report unit conversions on stderr so stdout stays machine-readable
fn report_conversion(cli: &Cli, usage: &UsageParameters, nf: NumberFormat) {
    let unit = cli.unit();
    if unit == Unit::Tokens {
        return;
    }
    for (amount, tokens) in [
        (cli.input, usage.input_tokens),
        (cli.output, usage.output_tokens),
    ] {
        eprintln!(
            "Converted {} {} to {} Tokens",
            format_number(amount, nf),
            unit.label(),
            format_number(tokens, nf)
        );
    }
}

/// Validate inputs and build usage plus projection settings.
///
/// Everything is checked before any cost is computed.
fn prepare(ctx: &CommandContext<'_>) -> Result<(UsageParameters, ProjectionSettings), AppError> {
    let usage = ctx.cli.usage()?;
    let settings = ctx.cli.projection_settings()?;
    report_conversion(ctx.cli, &usage, ctx.number_format);
    debug_log(format_args!(
        "usage: {} input tokens, {} output tokens, {} calls; {} months at growth {} ({} use case); {} pricing entries",
        usage.input_tokens,
        usage.output_tokens,
        usage.api_calls,
        settings.months,
        settings.growth_rate,
        ctx.cli.use_case().name(),
        ctx.pricing.len()
    ));
    Ok((usage, settings))
}

fn export_csv(path: Option<&Path>, rows: &[ProjectionRow]) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };
    write_projection_csv(path, rows)?;
    eprintln!("Wrote projection to {}", path.display());
    Ok(())
}

fn handle_calculate(ctx: &CommandContext<'_>, csv: Option<&Path>) -> Result<(), AppError> {
    let (usage, settings) = prepare(ctx)?;
    let entries = ctx.pricing.entries();

    let costs = calculate(entries, &usage)?;
    let projection = project(entries, &usage, settings.months, settings.growth_rate)?;

    if ctx.cli.json {
        println!(
            "{}",
            output_calculation_json(
                ctx.cli.unit(),
                &usage,
                Some(costs.as_slice()),
                &projection,
                settings.growth_rate
            )
        );
    } else {
        let opts = ctx.table_options();
        print_cost_table(&costs, &usage, opts);
        print_projection_table(&projection, settings.growth_rate, opts);
    }

    export_csv(csv, &projection)
}

fn handle_project(ctx: &CommandContext<'_>, csv: Option<&Path>) -> Result<(), AppError> {
    let (usage, settings) = prepare(ctx)?;

    let projection = project(
        ctx.pricing.entries(),
        &usage,
        settings.months,
        settings.growth_rate,
    )?;

    if ctx.cli.json {
        println!(
            "{}",
            output_calculation_json(ctx.cli.unit(), &usage, None, &projection, settings.growth_rate)
        );
    } else {
        print_projection_table(&projection, settings.growth_rate, ctx.table_options());
    }

    export_csv(csv, &projection)
}

fn handle_pricing(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_pricing_json(ctx.pricing));
    } else {
        print_pricing_table(ctx.pricing, ctx.table_options());
    }
}

pub(crate) fn run(command: Command, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        Command::Calculate { csv } => handle_calculate(ctx, csv.as_deref()),
        Command::Project { csv } => handle_project(ctx, csv.as_deref()),
        Command::Pricing => {
            handle_pricing(ctx);
            Ok(())
        }
    }
}
