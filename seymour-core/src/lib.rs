//! Second-neighbor analysis for Seymour's conjecture
//!
//! For every vertex of a directed graph, compute its out-neighborhood, its
//! second out-neighborhood and whether `|N2(v)| >= |N1(v)|` holds.
//!
//! ```
//! use seymour_core::{analyze, Digraph};
//!
//! let diamond = Digraph::from_edges([("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")]);
//! let result = analyze(&diamond).unwrap();
//! assert!(!result["a"].is_seymour);
//! assert!(result["d"].is_seymour);
//! ```

pub mod analyzer;
mod errors;
pub mod format;
pub mod generate;
pub mod graph;
pub mod session;
pub mod summary;

pub use analyzer::{
    analyze, analyze_edges, analyze_vertex, count_seymour_vertices, non_seymour_vertices,
    seymour_vertices, Analysis, VertexAnalysis,
};
pub use errors::GraphError;
pub use format::GraphData;
pub use generate::{generate, RandomGraphConfig};
pub use graph::{Digraph, DirectedGraph, VertexId};
pub use session::{EditPolicy, GameSession, Move, MoveOutcome, MutualEdgePolicy};
pub use summary::AnalysisSummary;
