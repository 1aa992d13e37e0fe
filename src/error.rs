use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Number of months must be between 1 and {max} for the {use_case} use case (got {months})")]
    MonthsOutOfRange {
        months: u32,
        max: u32,
        use_case: &'static str,
    },

    #[error("Growth rate must be between 0% and {max}% for the {use_case} use case (got {growth}%)")]
    GrowthOutOfRange {
        growth: f64,
        max: f64,
        use_case: &'static str,
    },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Invalid pricing for {model}: {reason}")]
    InvalidPricing { model: String, reason: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Cost(#[from] CostError),
}

/// Errors raised by the calculation engine itself
#[derive(Debug, Error, PartialEq)]
pub(crate) enum CostError {
    #[error("Number of API calls must be greater than 0.")]
    ZeroApiCalls,

    #[error("Number of months must be at least 1.")]
    InvalidMonths,

    #[error("Growth rate must be a fraction between 0 and 1 (got {0})")]
    InvalidGrowthRate(f64),

    #[error("{amount} {unit} is too large to convert to tokens (limit {limit})")]
    AmountTooLarge {
        amount: u64,
        unit: &'static str,
        limit: u64,
    },

    #[error("Input and output tokens per call exceed the supported total ({input} + {output})")]
    TokenOverflow { input: u64, output: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_months() {
        let e = AppError::MonthsOutOfRange {
            months: 30,
            max: 24,
            use_case: "general",
        };
        assert_eq!(
            e.to_string(),
            "Number of months must be between 1 and 24 for the general use case (got 30)"
        );
    }

    #[test]
    fn app_error_display_growth() {
        let e = AppError::GrowthOutOfRange {
            growth: 60.0,
            max: 50.0,
            use_case: "financial",
        };
        assert_eq!(
            e.to_string(),
            "Growth rate must be between 0% and 50% for the financial use case (got 60%)"
        );
    }

    #[test]
    fn app_error_display_locale() {
        let e = AppError::UnsupportedLocale {
            input: "xx".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported locale: xx");
    }

    #[test]
    fn app_error_display_export() {
        let e = AppError::Export {
            path: PathBuf::from("/nope/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(e.to_string(), "Failed to write /nope/out.csv: missing");
    }

    #[test]
    fn cost_error_zero_calls() {
        assert_eq!(
            CostError::ZeroApiCalls.to_string(),
            "Number of API calls must be greater than 0."
        );
    }

    #[test]
    fn cost_error_token_overflow() {
        let e = CostError::TokenOverflow {
            input: u64::MAX,
            output: 1,
        };
        assert_eq!(
            e.to_string(),
            "Input and output tokens per call exceed the supported total (18446744073709551615 + 1)"
        );
    }

    #[test]
    fn app_error_from_cost_error() {
        let app: AppError = CostError::InvalidMonths.into();
        assert_eq!(app.to_string(), "Number of months must be at least 1.");
    }
}
