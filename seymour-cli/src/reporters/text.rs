//! Text (terminal) reporter with colors and formatting

use crate::models::GraphReport;
use anyhow::Result;
use console::style;
use indexmap::IndexSet;
use seymour_core::{Analysis, AnalysisSummary, VertexAnalysis, VertexId};
use std::fmt::Display;

const RULE: &str = "──────────────────────────────────────";

/// Vertex tag: red for Seymour, blue for eliminated
pub fn vertex_marker(is_seymour: bool, options: super::RenderOptions) -> &'static str {
    match (is_seymour, options.emoji) {
        (true, true) => "🔴",
        (false, true) => "🔵",
        (true, false) => "[S]",
        (false, false) => "[ ]",
    }
}

fn format_set<V: Display>(set: &IndexSet<V>) -> String {
    let items: Vec<String> = set.iter().map(|v| v.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}

fn vertex_line<V: VertexId + Display>(
    vertex: &V,
    analysis: &VertexAnalysis<V>,
    options: super::RenderOptions,
) -> String {
    let ratio = format!("{:.2}", analysis.ratio);
    let ratio = if analysis.is_seymour {
        style(ratio).red()
    } else {
        style(ratio).blue()
    };
    format!(
        "  {} {:<6} |N1|={:<3} |N2|={:<3} ratio {}  N1: {}  N2: {}\n",
        vertex_marker(analysis.is_seymour, options),
        style(vertex).bold(),
        analysis.out_degree,
        analysis.second_degree,
        ratio,
        format_set(&analysis.first_neighbors),
        format_set(&analysis.second_neighbors),
    )
}

fn summary_lines<V: VertexId + Display>(
    summary: &AnalysisSummary<V>,
    options: super::RenderOptions,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Vertices: {}  Edges: {}  Seymour: {}  Non-Seymour: {}",
        summary.vertex_count, summary.edge_count, summary.seymour_count, summary.non_seymour_count
    ));
    if let Some(min) = summary.min_ratio {
        out.push_str(&format!("  Min ratio: {:.2}", min));
    }
    out.push('\n');

    if !summary.mutual_pairs.is_empty() {
        let pairs: Vec<String> = summary
            .mutual_pairs
            .iter()
            .map(|(u, v)| format!("{} ⇄ {}", u, v))
            .collect();
        out.push_str(&format!(
            "{} 2-cycles: {}\n",
            style("warning:").yellow().bold(),
            pairs.join(", ")
        ));
    }
    if !summary.self_loops.is_empty() {
        let loops: Vec<String> = summary.self_loops.iter().map(|v| v.to_string()).collect();
        out.push_str(&format!(
            "{} self-loops ignored: {}\n",
            style("warning:").yellow().bold(),
            loops.join(", ")
        ));
    }

    if summary.is_counterexample_candidate() {
        let tag = if options.emoji { "🚨 " } else { "" };
        out.push_str(&format!(
            "{}{}\n",
            tag,
            style("No Seymour vertex in an oriented graph: counterexample candidate!")
                .red()
                .bold()
        ));
    } else if summary.all_eliminated() {
        out.push_str(&format!(
            "{}\n",
            style("All vertices eliminated (graph has 2-cycles, so this is no counterexample)")
                .yellow()
        ));
    }
    out
}

/// Render report as formatted terminal output
pub fn render(report: &GraphReport, options: super::RenderOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}  {}\n",
        style("Seymour Analysis").bold(),
        style(&report.source).cyan()
    ));
    out.push_str(&format!("{}\n", style(RULE).dim()));

    if report.summary.vertex_count == 0 {
        out.push_str("Empty graph: nothing to analyze\n");
        return Ok(out);
    }

    for row in &report.vertices {
        out.push_str(&vertex_line(&row.vertex, &row.analysis, options));
    }
    if report.vertices.is_empty() {
        out.push_str("  (no vertices match the filter)\n");
    }

    out.push_str(&format!("{}\n", style(RULE).dim()));
    out.push_str(&summary_lines(&report.summary, options));
    Ok(out)
}

/// Compact classification shown by the editor after each move.
pub fn render_status<V: VertexId + Display>(
    analysis: &Analysis<V>,
    summary: &AnalysisSummary<V>,
    options: super::RenderOptions,
) -> String {
    let mut out = String::new();
    if summary.vertex_count == 0 {
        out.push_str("  (empty graph)\n");
    }
    for (vertex, a) in analysis {
        out.push_str(&vertex_line(vertex, a, options));
    }
    out.push_str(&summary_lines(summary, options));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;
    use crate::reporters::RenderOptions;
    use seymour_core::{analyze, Digraph};

    fn plain() -> RenderOptions {
        console::set_colors_enabled(false);
        RenderOptions { emoji: false }
    }

    #[test]
    fn test_text_render_lists_vertices() {
        let out = render(&test_report(), plain()).unwrap();
        assert!(out.contains("Seymour Analysis"));
        assert!(out.contains("path.json"));
        assert!(out.contains("[ ] b"));
        assert!(out.contains("[S] a"));
        assert!(out.contains("N2: {c}"));
        assert!(out.contains("Vertices: 3  Edges: 2  Seymour: 2  Non-Seymour: 1"));
    }

    #[test]
    fn test_text_render_emoji_markers() {
        console::set_colors_enabled(false);
        let out = render(&test_report(), RenderOptions { emoji: true }).unwrap();
        assert!(out.contains("🔴"));
        assert!(out.contains("🔵"));
        assert!(!out.contains("[S]"));
    }

    #[test]
    fn test_text_render_filtered_out() {
        let mut report = test_report();
        report.vertices.clear();
        let out = render(&report, plain()).unwrap();
        assert!(out.contains("no vertices match"));
    }

    #[test]
    fn test_status_flags_two_cycles() {
        let graph = Digraph::from_edges([(0u32, 1u32), (1, 0)]);
        let analysis = analyze(&graph).unwrap();
        let summary = AnalysisSummary::from_analysis(&graph, &analysis);
        let out = render_status(&analysis, &summary, plain());
        assert!(out.contains("2-cycles: 0 ⇄ 1"));
        assert!(out.contains("All vertices eliminated"));
        assert!(!out.contains("counterexample candidate"));
    }

    #[test]
    fn test_status_empty_graph() {
        let graph: Digraph<u32> = Digraph::new();
        let analysis = analyze(&graph).unwrap();
        let summary = AnalysisSummary::from_analysis(&graph, &analysis);
        let out = render_status(&analysis, &summary, plain());
        assert!(out.contains("(empty graph)"));
        assert!(out.contains("Vertices: 0"));
    }
}
