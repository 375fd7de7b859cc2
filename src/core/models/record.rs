use serde::Serialize;

use crate::core::pricing::Pricing;

/// Terminal status of one candidate image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileStatus {
    Success,
    Failed,
}

/// One row of the cost report. Field order is the report's column order;
/// the serde renames are the CSV header names.
#[derive(Debug, Clone, Serialize)]
pub struct CostRecord {
    #[serde(rename = "File ID")]
    pub file_id: String,
    #[serde(rename = "Status")]
    pub status: FileStatus,
    #[serde(rename = "Input Tokens")]
    pub input_tokens: u64,
    #[serde(rename = "Output Tokens")]
    pub output_tokens: u64,
    #[serde(rename = "Total Tokens")]
    pub total_tokens: u64,
    #[serde(rename = "USD Cost")]
    pub usd_cost: f64,
    #[serde(rename = "INR Cost")]
    pub inr_cost: f64,
}

impl CostRecord {
    /// Record for an image whose document landed on disk.
    pub fn success(
        file_id: impl Into<String>,
        input_tokens: u64,
        output_tokens: u64,
        pricing: &Pricing,
    ) -> Self {
        let usd_cost = pricing.usd_cost(input_tokens, output_tokens);
        Self {
            file_id: file_id.into(),
            status: FileStatus::Success,
            input_tokens,
            output_tokens,
            total_tokens: input_tokens + output_tokens,
            usd_cost,
            inr_cost: pricing.inr_cost(usd_cost),
        }
    }

    /// Record for an image that failed anywhere in the pipeline. All
    /// numeric fields are zero, extraction tokens included.
    pub fn failed(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            status: FileStatus::Failed,
            input_tokens: 0,
            output_tokens: 0,
            total_tokens: 0,
            usd_cost: 0.0,
            inr_cost: 0.0,
        }
    }
}
