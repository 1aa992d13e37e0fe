use serde::Deserialize;

/// One provider/model row of the pricing table (rates in USD per 1,000 tokens)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct PricingEntry {
    pub(crate) provider: String,
    pub(crate) model: String,
    /// Informational only, e.g. "128K/4K"
    #[serde(rename = "context", default)]
    pub(crate) context_window: String,
    #[serde(rename = "input_per_1k")]
    pub(crate) input_rate_per_1k: f64,
    #[serde(rename = "output_per_1k")]
    pub(crate) output_rate_per_1k: f64,
}

impl PricingEntry {
    pub(crate) fn new(
        provider: &str,
        model: &str,
        context_window: &str,
        input_rate_per_1k: f64,
        output_rate_per_1k: f64,
    ) -> Self {
        Self {
            provider: provider.to_string(),
            model: model.to_string(),
            context_window: context_window.to_string(),
            input_rate_per_1k,
            output_rate_per_1k,
        }
    }

    /// Cost of a single call with the given token counts
    pub(crate) fn per_call_cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        self.input_rate_per_1k * input_tokens as f64 / 1000.0
            + self.output_rate_per_1k * output_tokens as f64 / 1000.0
    }
}
