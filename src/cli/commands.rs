//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

use crate::consts::DEFAULT_CSV_FILE;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Per-model costs plus a monthly projection (default)
    Calculate {
        /// Also write the projection as CSV (default file: llm_cost_projection.csv)
        #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE)]
        csv: Option<PathBuf>,
    },
    /// Monthly cost projection only
    Project {
        /// Also write the projection as CSV (default file: llm_cost_projection.csv)
        #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE)]
        csv: Option<PathBuf>,
    },
    /// Show the pricing table in use
    Pricing,
}

/// Normalized command after defaulting
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Calculate { csv: Option<PathBuf> },
    Project { csv: Option<PathBuf> },
    Pricing,
}

/// Parse CLI command, defaulting to `calculate`
pub(crate) fn parse_command(cmd: Option<Commands>) -> Command {
    match cmd {
        Some(Commands::Calculate { csv }) => Command::Calculate { csv },
        Some(Commands::Project { csv }) => Command::Project { csv },
        Some(Commands::Pricing) => Command::Pricing,
        None => Command::Calculate { csv: None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn command(args: &[&str]) -> Command {
        let mut argv = vec!["llmcost"];
        argv.extend_from_slice(args);
        parse_command(Cli::try_parse_from(argv).unwrap().command)
    }

    #[test]
    fn no_subcommand_is_calculate() {
        assert_eq!(command(&[]), Command::Calculate { csv: None });
    }

    #[test]
    fn csv_without_value_uses_default_file() {
        assert_eq!(
            command(&["project", "--csv"]),
            Command::Project {
                csv: Some(PathBuf::from(DEFAULT_CSV_FILE))
            }
        );
    }

    #[test]
    fn csv_with_value() {
        assert_eq!(
            command(&["calculate", "--csv", "out.csv"]),
            Command::Calculate {
                csv: Some(PathBuf::from("out.csv"))
            }
        );
    }

    #[test]
    fn pricing_subcommand() {
        assert_eq!(command(&["pricing"]), Command::Pricing);
    }
}
