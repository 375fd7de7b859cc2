use serde::{Deserialize, Serialize};

/// Token pricing in dollars per million tokens, plus the USD→INR rate
/// used for the second cost column of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default = "default_input_price")]
    pub input_per_million_usd: f64,
    #[serde(default = "default_output_price")]
    pub output_per_million_usd: f64,
    #[serde(default = "default_usd_to_inr")]
    pub usd_to_inr_rate: f64,
}

// Gemini Flash rates (non-thinking output tier).
fn default_input_price() -> f64 {
    0.15
}
fn default_output_price() -> f64 {
    0.60
}
fn default_usd_to_inr() -> f64 {
    83.33
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            input_per_million_usd: default_input_price(),
            output_per_million_usd: default_output_price(),
            usd_to_inr_rate: default_usd_to_inr(),
        }
    }
}

impl Pricing {
    /// Cost in USD for one request's token counts.
    pub fn usd_cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1_000_000.0) * self.input_per_million_usd
            + (output_tokens as f64 / 1_000_000.0) * self.output_per_million_usd
    }

    /// Cost in INR at the configured conversion rate.
    pub fn inr_cost(&self, usd_cost: f64) -> f64 {
        usd_cost * self.usd_to_inr_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rates_match_flash_pricing() {
        let p = Pricing::default();
        assert!((p.input_per_million_usd - 0.15).abs() < 1e-12);
        assert!((p.output_per_million_usd - 0.60).abs() < 1e-12);
        assert!((p.usd_to_inr_rate - 83.33).abs() < 1e-12);
    }

    #[test]
    fn usd_cost_per_million() {
        let p = Pricing::default();
        let cost = p.usd_cost(1_000_000, 1_000_000);
        assert!((cost - 0.75).abs() < 1e-12);
    }

    #[test]
    fn usd_cost_scenario_a() {
        // 120 input / 30 output tokens at the default rates.
        let p = Pricing::default();
        let cost = p.usd_cost(120, 30);
        let expected = (120.0 / 1_000_000.0) * 0.15 + (30.0 / 1_000_000.0) * 0.60;
        assert!((cost - expected).abs() < 1e-15);
    }

    #[test]
    fn zero_tokens_cost_nothing() {
        let p = Pricing::default();
        assert_eq!(p.usd_cost(0, 0), 0.0);
        assert_eq!(p.inr_cost(0.0), 0.0);
    }

    #[test]
    fn inr_is_exact_multiple_of_usd() {
        let p = Pricing::default();
        let usd = p.usd_cost(1500, 400);
        assert_eq!(p.inr_cost(usd), usd * 83.33);
    }

    #[test]
    fn deserialize_partial_pricing_fills_defaults() {
        let p: Pricing = toml::from_str("input_per_million_usd = 0.30").unwrap();
        assert!((p.input_per_million_usd - 0.30).abs() < 1e-12);
        assert!((p.output_per_million_usd - 0.60).abs() < 1e-12);
        assert!((p.usd_to_inr_rate - 83.33).abs() < 1e-12);
    }
}
