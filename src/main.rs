mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod pricing;
mod utils;

use clap::Parser;

use app::{CommandContext, run};
use cli::{Cli, parse_command};
use config::Config;
use error::AppError;
use output::NumberFormat;
use utils::set_debug;

fn try_main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::load();
    set_debug(cli.debug || config.debug);

    let mut cli = cli.with_config(&config);
    let command = parse_command(cli.command.take());

    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    let pricing = config.pricing_table()?;

    let ctx = CommandContext {
        cli: &cli,
        pricing: &pricing,
        number_format,
    };
    run(command, &ctx)
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
