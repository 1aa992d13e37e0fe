//! CLI argument definitions
//!
//! Global CLI options, configuration merging, and input validation.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use crate::config::Config;
use crate::core::{Unit, UsageParameters, validate_api_calls};
use crate::error::AppError;
use crate::utils::debug_log;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Projection presets: default growth/horizon and the accepted ranges
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum UseCase {
    /// No growth unless requested, up to 24 months and 100% growth (default)
    #[default]
    General,
    /// 10% monthly growth by default, up to 36 months and 50% growth
    Financial,
}

impl UseCase {
    pub(crate) fn name(self) -> &'static str {
        match self {
            UseCase::General => "general",
            UseCase::Financial => "financial",
        }
    }

    pub(crate) fn default_growth_percent(self) -> f64 {
        match self {
            UseCase::General => 0.0,
            UseCase::Financial => 10.0,
        }
    }

    pub(crate) fn max_growth_percent(self) -> f64 {
        match self {
            UseCase::General => 100.0,
            UseCase::Financial => 50.0,
        }
    }

    pub(crate) fn default_months(self) -> u32 {
        12
    }

    pub(crate) fn max_months(self) -> u32 {
        match self {
            UseCase::General => 24,
            UseCase::Financial => 36,
        }
    }
}

/// Validated projection horizon and growth
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProjectionSettings {
    pub(crate) months: u32,
    /// Fraction, e.g. 0.05 for 5%
    pub(crate) growth_rate: f64,
}

#[derive(Parser)]
#[command(name = "llmcost")]
#[command(about = "Estimate and project hosted LLM API costs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Input amount per call, in --unit
    #[arg(short, long, global = true, default_value_t = 1000)]
    pub(crate) input: u64,

    /// Output amount per call, in --unit
    #[arg(short, long, global = true, default_value_t = 500)]
    pub(crate) output: u64,

    /// Number of API calls (per month, for projections)
    #[arg(short = 'n', long, global = true, default_value_t = 100)]
    pub(crate) calls: u64,

    /// Unit of the input/output amounts [default: tokens]
    #[arg(short, long, global = true, value_enum)]
    pub(crate) unit: Option<Unit>,

    /// Projection preset [default: general]
    #[arg(long, global = true, value_enum)]
    pub(crate) use_case: Option<UseCase>,

    /// Monthly growth of API calls in percent (e.g. 5 for 5%)
    #[arg(short, long, global = true, value_name = "PERCENT")]
    pub(crate) growth: Option<f64>,

    /// Number of months to project
    #[arg(short, long, global = true)]
    pub(crate) months: Option<u32>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Compact output (fewer columns, shorter numbers)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if self.unit.is_none()
            && let Some(ref name) = config.unit
        {
            // Unrecognized names leave the amounts unconverted
            let unit = Unit::from_name(name).unwrap_or_else(|| {
                debug_log(format_args!(
                    "unknown unit \"{name}\" in config, treating amounts as tokens"
                ));
                Unit::Tokens
            });
            self.unit = Some(unit);
        }

        if let Some(color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            self.color = color;
        }

        if self.use_case.is_none() {
            self.use_case = config.use_case;
        }
        if self.growth.is_none() {
            self.growth = config.growth;
        }
        if self.months.is_none() {
            self.months = config.months;
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn unit(&self) -> Unit {
        self.unit.unwrap_or_default()
    }

    pub(crate) fn use_case(&self) -> UseCase {
        self.use_case.unwrap_or_default()
    }

    /// Validate the call count and convert amounts to tokens.
    pub(crate) fn usage(&self) -> Result<UsageParameters, AppError> {
        validate_api_calls(self.calls)?;
        Ok(UsageParameters::from_amounts(
            self.input,
            self.output,
            self.calls,
            self.unit(),
        )?)
    }

    /// Resolve months and growth against the selected use case's bounds.
    pub(crate) fn projection_settings(&self) -> Result<ProjectionSettings, AppError> {
        let use_case = self.use_case();

        let months = self.months.unwrap_or_else(|| use_case.default_months());
        if months < 1 || months > use_case.max_months() {
            return Err(AppError::MonthsOutOfRange {
                months,
                max: use_case.max_months(),
                use_case: use_case.name(),
            });
        }

        let growth = self
            .growth
            .unwrap_or_else(|| use_case.default_growth_percent());
        if !(0.0..=use_case.max_growth_percent()).contains(&growth) {
            return Err(AppError::GrowthOutOfRange {
                growth,
                max: use_case.max_growth_percent(),
                use_case: use_case.name(),
            });
        }

        Ok(ProjectionSettings {
            months,
            growth_rate: growth / 100.0,
        })
    }
}
