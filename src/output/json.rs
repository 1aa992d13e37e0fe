use serde_json::{Value, json};

use crate::core::{CostRow, ProjectionRow, Unit, UsageParameters};
use crate::pricing::{PricingEntry, PricingTable};

fn pricing_entry_json(entry: &PricingEntry) -> Value {
    json!({
        "provider": entry.provider,
        "model": entry.model,
        "context": entry.context_window,
        "input_per_1k": entry.input_rate_per_1k,
        "output_per_1k": entry.output_rate_per_1k,
    })
}

fn cost_row_json(row: &CostRow<'_>) -> Value {
    let mut value = pricing_entry_json(row.entry);
    value["per_call_cost"] = json!(row.per_call_cost);
    value["total_cost"] = json!(row.total_cost);
    value
}

/// Calculation result as JSON; `costs` is omitted for projection-only output.
///
/// Numbers are emitted unrounded.
pub(crate) fn output_calculation_json(
    unit: Unit,
    usage: &UsageParameters,
    costs: Option<&[CostRow<'_>]>,
    projection: &[ProjectionRow],
    growth_rate: f64,
) -> String {
    let mut output = json!({
        "unit": unit.label().to_ascii_lowercase(),
        "input_tokens": usage.input_tokens,
        "output_tokens": usage.output_tokens,
        "api_calls": usage.api_calls,
        "growth_rate": growth_rate,
        "projection": projection,
    });
    if let Some(rows) = costs {
        output["costs"] = Value::Array(rows.iter().map(cost_row_json).collect());
    }
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

pub(crate) fn output_pricing_json(pricing: &PricingTable) -> String {
    let entries: Vec<Value> = pricing.entries().iter().map(pricing_entry_json).collect();
    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{calculate, project};

    fn usage() -> UsageParameters {
        UsageParameters {
            input_tokens: 1000,
            output_tokens: 500,
            api_calls: 100,
        }
    }

    #[test]
    fn calculation_json_has_costs_and_projection() {
        let table = PricingTable::builtin();
        let usage = usage();
        let costs = calculate(table.entries(), &usage).unwrap();
        let projection = project(table.entries(), &usage, 3, 0.0).unwrap();
        let json = output_calculation_json(
            Unit::Tokens,
            &usage,
            Some(costs.as_slice()),
            &projection,
            0.0,
        );

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unit"], "tokens");
        assert_eq!(value["input_tokens"], 1000);
        assert_eq!(value["costs"].as_array().unwrap().len(), 5);
        assert_eq!(value["costs"][2]["model"], "Llama 3.1 405b");
        let llama_total = value["costs"][2]["total_cost"].as_f64().unwrap();
        assert!((llama_total - 0.195).abs() < 1e-12);

        let rows = value["projection"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["month"], 1);
        assert_eq!(rows[0]["api_calls"], 100);
        assert_eq!(rows[0]["total_tokens"], 1500);
    }

    #[test]
    fn projection_only_json_omits_costs() {
        let table = PricingTable::builtin();
        let usage = usage();
        let projection = project(table.entries(), &usage, 1, 0.0).unwrap();
        let json = output_calculation_json(Unit::Words, &usage, None, &projection, 0.0);

        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("costs").is_none());
        assert_eq!(value["unit"], "words");
    }

    #[test]
    fn growth_rate_is_the_applied_fraction() {
        let table = PricingTable::builtin();
        let usage = usage();
        let projection = project(table.entries(), &usage, 2, 0.1).unwrap();
        let json = output_calculation_json(Unit::Tokens, &usage, None, &projection, 0.1);

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["growth_rate"].as_f64(), Some(0.1));
        assert_eq!(value["projection"][1]["api_calls"], 110);
    }

    #[test]
    fn pricing_json_lists_entries_in_order() {
        let json = output_pricing_json(&PricingTable::builtin());
        let value: Value = serde_json::from_str(&json).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[0]["provider"], "OpenAI");
        assert_eq!(arr[4]["model"], "Amazon Titan Text");
        assert_eq!(arr[3]["context"], "128K");
    }
}
