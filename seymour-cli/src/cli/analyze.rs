//! Analyze and count commands
//!
//! 1. Load the graph file
//! 2. Classify every vertex
//! 3. Summarize (counts, 2-cycles, self-loops)
//! 4. Render as text or JSON

use crate::graph::load_graph;
use crate::models::{GraphReport, VertexFilter};
use crate::reporters::{self, OutputFormat, RenderOptions};

use anyhow::{Context, Result};
use seymour_core::{analyze, count_seymour_vertices, AnalysisSummary};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Run the analyze command
pub fn run(
    file: &Path,
    format: &str,
    output: Option<&Path>,
    only: &str,
    options: RenderOptions,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let filter: VertexFilter = only.parse()?;

    let report = build_report(file, filter)?;
    let rendered = reporters::report_with_format(&report, format, options)?;

    super::write_output(&rendered, output, format == OutputFormat::Json, options)
}

/// Analyze `file` into a report
pub(crate) fn build_report(file: &Path, filter: VertexFilter) -> Result<GraphReport> {
    let start = Instant::now();
    let graph = load_graph(file)?;

    let analysis =
        analyze(&graph).with_context(|| format!("Failed to analyze {}", file.display()))?;
    let summary = AnalysisSummary::from_analysis(&graph, &analysis);

    if !summary.is_oriented {
        warn!(
            "{} is not oriented ({} 2-cycles, {} self-loops)",
            file.display(),
            summary.mutual_pairs.len(),
            summary.self_loops.len()
        );
    }
    info!(
        "Analyzed {} vertices in {:?}: {} Seymour",
        summary.vertex_count,
        start.elapsed(),
        summary.seymour_count
    );

    Ok(GraphReport::new(
        file.display().to_string(),
        summary,
        analysis,
        filter,
    ))
}

/// Run the count command
pub fn count(file: &Path) -> Result<()> {
    let graph = load_graph(file)?;
    let n = count_seymour_vertices(&graph)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;
    println!("{}", n);
    Ok(())
}
