//! Aggregate diagnostics over a full analysis

use serde::Serialize;

use crate::analyzer::{analyze, Analysis};
use crate::errors::GraphError;
use crate::graph::{Digraph, VertexId};

/// Counts and vertex lists derived from one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary<V: VertexId> {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub seymour_count: usize,
    pub non_seymour_count: usize,
    pub seymour_vertices: Vec<V>,
    pub non_seymour_vertices: Vec<V>,
    pub mutual_pairs: Vec<(V, V)>,
    pub self_loops: Vec<V>,
    /// Smallest `second_degree / max(out_degree, 1)` over all vertices
    pub min_ratio: Option<f64>,
    pub is_oriented: bool,
}

impl<V: VertexId> AnalysisSummary<V> {
    /// Analyze `graph` and summarize the result.
    pub fn of(graph: &Digraph<V>) -> Result<Self, GraphError> {
        let analysis = analyze(graph)?;
        Ok(Self::from_analysis(graph, &analysis))
    }

    pub fn from_analysis(graph: &Digraph<V>, analysis: &Analysis<V>) -> Self {
        let (seymour, non_seymour): (Vec<_>, Vec<_>) =
            analysis.iter().partition(|(_, a)| a.is_seymour);

        let mutual_pairs = graph.mutual_pairs();
        let self_loops = graph.self_loops();
        let is_oriented = mutual_pairs.is_empty() && self_loops.is_empty();

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            seymour_count: seymour.len(),
            non_seymour_count: non_seymour.len(),
            seymour_vertices: seymour.into_iter().map(|(v, _)| v.clone()).collect(),
            non_seymour_vertices: non_seymour.into_iter().map(|(v, _)| v.clone()).collect(),
            mutual_pairs,
            self_loops,
            min_ratio: analysis.values().map(|a| a.ratio).reduce(f64::min),
            is_oriented,
        }
    }

    /// Non-empty graph with no Seymour vertex left (the game's win state).
    pub fn all_eliminated(&self) -> bool {
        self.vertex_count > 0 && self.seymour_count == 0
    }

    /// An all-eliminated graph that is also oriented would refute the conjecture.
    pub fn is_counterexample_candidate(&self) -> bool {
        self.all_eliminated() && self.is_oriented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph_summary() {
        let summary = AnalysisSummary::of(&Digraph::<u32>::new()).unwrap();
        assert_eq!(summary.vertex_count, 0);
        assert_eq!(summary.seymour_count, 0);
        assert_eq!(summary.min_ratio, None);
        assert!(summary.is_oriented);
        assert!(!summary.all_eliminated());
    }

    #[test]
    fn test_diamond_summary() {
        let g = Digraph::from_edges([(0u32, 1), (0, 2), (1, 3), (2, 3)]);
        let summary = AnalysisSummary::of(&g).unwrap();
        assert_eq!(summary.vertex_count, 4);
        assert_eq!(summary.edge_count, 4);
        assert_eq!(summary.seymour_count, 1);
        assert_eq!(summary.seymour_vertices, vec![3]);
        assert_eq!(summary.non_seymour_vertices, vec![0, 1, 2]);
        assert_eq!(summary.min_ratio, Some(0.0));
        assert!(!summary.all_eliminated());
    }

    #[test]
    fn test_two_cycle_eliminates_everything_but_is_not_oriented() {
        let g = Digraph::from_edges([(0u32, 1), (1, 0)]);
        let summary = AnalysisSummary::of(&g).unwrap();
        assert_eq!(summary.seymour_count, 0);
        assert!(summary.all_eliminated());
        assert_eq!(summary.mutual_pairs, vec![(0, 1)]);
        assert!(!summary.is_oriented);
        assert!(!summary.is_counterexample_candidate());
    }

    #[test]
    fn test_counts_partition_vertices() {
        let g = Digraph::from_edges([(0u32, 1), (1, 2), (2, 0), (1, 3)]);
        let summary = AnalysisSummary::of(&g).unwrap();
        assert_eq!(
            summary.seymour_count + summary.non_seymour_count,
            summary.vertex_count
        );
        assert_eq!(summary.seymour_vertices.len(), summary.seymour_count);
    }
}
