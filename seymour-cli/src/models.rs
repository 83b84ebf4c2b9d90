//! Report types shared by the commands and reporters

use crate::graph::VertexKey;
use seymour_core::{Analysis, AnalysisSummary, VertexAnalysis};
use serde::Serialize;
use std::str::FromStr;

/// One vertex line of a report
#[derive(Debug, Clone, Serialize)]
pub struct VertexRow {
    pub vertex: VertexKey,
    #[serde(flatten)]
    pub analysis: VertexAnalysis<VertexKey>,
}

/// Which vertices a report lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexFilter {
    #[default]
    All,
    Seymour,
    NonSeymour,
}

impl VertexFilter {
    pub fn keeps(&self, analysis: &VertexAnalysis<VertexKey>) -> bool {
        match self {
            VertexFilter::All => true,
            VertexFilter::Seymour => analysis.is_seymour,
            VertexFilter::NonSeymour => !analysis.is_seymour,
        }
    }
}

impl FromStr for VertexFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(VertexFilter::All),
            "seymour" => Ok(VertexFilter::Seymour),
            "non-seymour" | "nonseymour" => Ok(VertexFilter::NonSeymour),
            _ => Err(anyhow::anyhow!(
                "Unknown filter '{}'. Valid filters: all, seymour, non-seymour",
                s
            )),
        }
    }
}

/// Full analysis of one graph file
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub source: String,
    pub summary: AnalysisSummary<VertexKey>,
    pub vertices: Vec<VertexRow>,
}

impl GraphReport {
    /// The summary always covers the whole graph; `filter` only trims the rows.
    pub fn new(
        source: impl Into<String>,
        summary: AnalysisSummary<VertexKey>,
        analysis: Analysis<VertexKey>,
        filter: VertexFilter,
    ) -> Self {
        let vertices = analysis
            .into_iter()
            .filter(|(_, a)| filter.keeps(a))
            .map(|(vertex, analysis)| VertexRow { vertex, analysis })
            .collect();
        Self {
            source: source.into(),
            summary,
            vertices,
        }
    }
}
