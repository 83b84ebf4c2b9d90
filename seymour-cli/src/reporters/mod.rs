//! Output reporters for analysis results
//!
//! Supports two output formats:
//! - `text` - Terminal output with colors and emoji
//! - `json` - Machine-readable JSON

mod json;
mod text;

pub use text::{render_status, vertex_marker};

use crate::models::GraphReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Terminal rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub emoji: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { emoji: true }
    }
}

/// Render a graph report using an OutputFormat enum
pub fn report_with_format(
    report: &GraphReport,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report, options),
        OutputFormat::Json => json::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::graph::VertexKey;
    use crate::models::VertexFilter;
    use seymour_core::{analyze, AnalysisSummary, Digraph};

    /// Path a -> b -> c: b is the only non-Seymour vertex
    pub(crate) fn test_report() -> GraphReport {
        let k = |s: &str| VertexKey::Name(s.to_string());
        let graph = Digraph::from_edges([(k("a"), k("b")), (k("b"), k("c"))]);
        let analysis = analyze(&graph).unwrap();
        let summary = AnalysisSummary::from_analysis(&graph, &analysis);
        GraphReport::new("path.json", summary, analysis, VertexFilter::All)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
