//! JSON reporter
//!
//! Outputs the full GraphReport as pretty-printed JSON for piping to jq or
//! further processing.

use crate::models::GraphReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &GraphReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
