/// Approximate tokens per word
pub(crate) const WORDS_TO_TOKENS: f64 = 1.3;

/// Approximate tokens per character
pub(crate) const CHARACTERS_TO_TOKENS: f64 = 0.25;

/// Largest word or character count converted exactly (2^53)
pub(crate) const MAX_CONVERTIBLE_AMOUNT: u64 = 1 << 53;

/// File name used when `--csv` is given without a path
pub(crate) const DEFAULT_CSV_FILE: &str = "llm_cost_projection.csv";
