use crate::error::AppError;

use super::types::PricingEntry;

/// Ordered, read-only pricing table.
///
/// Built once at startup (either the built-in rates or the `[[pricing]]`
/// list from the config file) and only ever borrowed afterwards.
#[derive(Debug, Clone)]
pub(crate) struct PricingTable {
    entries: Vec<PricingEntry>,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PricingTable {
    /// Built-in reference rates
    pub(crate) fn builtin() -> Self {
        Self {
            entries: vec![
                PricingEntry::new("OpenAI", "GPT-4 Turbo", "128K/4K", 0.025, 0.025),
                PricingEntry::new("Anthropic", "Claude 3 Opus", "200K/4K", 0.0525, 0.0525),
                PricingEntry::new("Meta (Llama 3)", "Llama 3.1 405b", "128K/2K", 0.0013, 0.0013),
                PricingEntry::new("Google Gemini", "Gemini 1.5 Flash", "128K", 0.0001, 0.0001),
                PricingEntry::new("Bedrock", "Amazon Titan Text", "100K/4K", 0.1000, 0.1000),
            ],
        }
    }

    /// Build a table from user-supplied entries, rejecting negative or non-finite rates.
    pub(crate) fn from_entries(entries: Vec<PricingEntry>) -> Result<Self, AppError> {
        if entries.is_empty() {
            return Err(AppError::InvalidPricing {
                model: "(none)".to_string(),
                reason: "pricing table must contain at least one entry".to_string(),
            });
        }
        for entry in &entries {
            check_rate(entry, "input_per_1k", entry.input_rate_per_1k)?;
            check_rate(entry, "output_per_1k", entry.output_rate_per_1k)?;
        }
        Ok(Self { entries })
    }

    pub(crate) fn entries(&self) -> &[PricingEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

fn check_rate(entry: &PricingEntry, field: &str, rate: f64) -> Result<(), AppError> {
    if rate.is_finite() && rate >= 0.0 {
        return Ok(());
    }
    Err(AppError::InvalidPricing {
        model: entry.model.clone(),
        reason: format!("{field} must be a non-negative number (got {rate})"),
    })
}
