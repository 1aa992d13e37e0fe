//! Unit conversion
//!
//! Providers bill by token, but callers often only know a word or character
//! count. These are approximated with fixed ratios and truncated to an integer.
//! Word and character counts above 2^53 are rejected since they no longer
//! convert exactly through `f64`.

use clap::ValueEnum;

use crate::consts::{CHARACTERS_TO_TOKENS, MAX_CONVERTIBLE_AMOUNT, WORDS_TO_TOKENS};
use crate::error::CostError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Unit {
    /// Amounts are already token counts (default)
    #[default]
    Tokens,
    /// Amounts are word counts (1 word ≈ 1.3 tokens)
    Words,
    /// Amounts are character counts (1 character ≈ 0.25 tokens)
    Characters,
}

impl Unit {
    /// Resolve a free-form unit name (e.g. from the config file).
    ///
    /// Returns `None` for names that are not recognized; callers fall back to
    /// [`Unit::Tokens`], i.e. the amount is used unconverted.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "tokens" | "token" => Some(Unit::Tokens),
            "words" | "word" => Some(Unit::Words),
            "characters" | "character" | "chars" => Some(Unit::Characters),
            _ => None,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Unit::Tokens => "Tokens",
            Unit::Words => "Words",
            Unit::Characters => "Characters",
        }
    }
}

/// Convert an amount in `unit` to a token count
pub(crate) fn convert(value: u64, unit: Unit) -> Result<u64, CostError> {
    let ratio = match unit {
        Unit::Tokens => return Ok(value),
        Unit::Words => WORDS_TO_TOKENS,
        Unit::Characters => CHARACTERS_TO_TOKENS,
    };
    if value > MAX_CONVERTIBLE_AMOUNT {
        return Err(CostError::AmountTooLarge {
            amount: value,
            unit: unit.label(),
            limit: MAX_CONVERTIBLE_AMOUNT,
        });
    }
    Ok((value as f64 * ratio).floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_identity() {
        for v in [0, 1, 7, 1000, 123_456_789] {
            assert_eq!(convert(v, Unit::Tokens).unwrap(), v);
        }
    }

    #[test]
    fn words_scale_by_1_3_and_truncate() {
        assert_eq!(convert(0, Unit::Words).unwrap(), 0);
        assert_eq!(convert(1, Unit::Words).unwrap(), 1);
        assert_eq!(convert(3, Unit::Words).unwrap(), 3);
        assert_eq!(convert(10, Unit::Words).unwrap(), 13);
        assert_eq!(convert(500, Unit::Words).unwrap(), 650);
        assert_eq!(convert(1000, Unit::Words).unwrap(), 1300);
    }

    #[test]
    fn characters_scale_by_quarter_and_truncate() {
        assert_eq!(convert(0, Unit::Characters).unwrap(), 0);
        assert_eq!(convert(3, Unit::Characters).unwrap(), 0);
        assert_eq!(convert(7, Unit::Characters).unwrap(), 1);
        assert_eq!(convert(1000, Unit::Characters).unwrap(), 250);
        assert_eq!(convert(1001, Unit::Characters).unwrap(), 250);
    }

    #[test]
    fn words_match_floor_formula() {
        for v in 0..2000u64 {
            assert_eq!(
                convert(v, Unit::Words).unwrap(),
                (v as f64 * 1.3).floor() as u64
            );
            assert_eq!(
                convert(v, Unit::Characters).unwrap(),
                (v as f64 * 0.25).floor() as u64
            );
        }
    }

    #[test]
    fn from_name_known_units() {
        assert_eq!(Unit::from_name("tokens"), Some(Unit::Tokens));
        assert_eq!(Unit::from_name("Words"), Some(Unit::Words));
        assert_eq!(Unit::from_name(" CHARACTERS "), Some(Unit::Characters));
        assert_eq!(Unit::from_name("chars"), Some(Unit::Characters));
    }

    #[test]
    fn from_name_unknown_unit() {
        assert_eq!(Unit::from_name("sentences"), None);
        assert_eq!(Unit::from_name(""), None);
        // Unknown names fall back to an unconverted amount
        let unit = Unit::from_name("sentences").unwrap_or_default();
        assert_eq!(convert(42, unit).unwrap(), 42);
    }

    #[test]
    fn tokens_have_no_upper_limit() {
        assert_eq!(convert(u64::MAX, Unit::Tokens).unwrap(), u64::MAX);
    }

    #[test]
    fn huge_word_counts_are_rejected() {
        assert_eq!(
            convert(MAX_CONVERTIBLE_AMOUNT, Unit::Characters).unwrap(),
            MAX_CONVERTIBLE_AMOUNT / 4
        );
        let err = convert(MAX_CONVERTIBLE_AMOUNT + 1, Unit::Words).unwrap_err();
        assert!(matches!(err, CostError::AmountTooLarge { unit: "Words", .. }));
        assert!(convert(u64::MAX, Unit::Characters).is_err());
    }
}
