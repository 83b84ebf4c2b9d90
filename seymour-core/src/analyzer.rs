// Seymour second-neighbor analysis
//
// WHAT IS BEING CHECKED:
// Seymour's Second-Neighbor Conjecture says every finite oriented graph
// (no self-loops, no 2-cycles) has a vertex whose second out-neighborhood
// is at least as large as its first out-neighborhood.
//
// For a vertex v:
//   N1(v) = { w : v -> w, w != v }
//   N2(v) = { w : u -> w for some u in N1(v) } \ N1(v) \ { v }
//   v is a Seymour vertex  <=>  |N2(v)| >= |N1(v)|
//
// Example (the "diamond"):
//   a -> b, a -> c, b -> d, c -> d
//   N1(a) = {b, c}, N2(a) = {d}   (both paths land on d, counted once)
//   |N2(a)| = 1 < 2 = |N1(a)|  =>  a is NOT a Seymour vertex
//
// A vertex reachable both directly and in two hops counts only in N1.
//
// The analysis is a pure function over an immutable snapshot of the graph.
// Cost: O(V * (V + E)) worst case for a full pass.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::errors::GraphError;
use crate::graph::{vertex_label, Digraph, DirectedGraph, VertexId};

/// Per-vertex classification, keyed by vertex in graph enumeration order.
pub type Analysis<V> = IndexMap<V, VertexAnalysis<V>>;

/// First/second out-neighborhoods of one vertex and the resulting verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexAnalysis<V: VertexId> {
    pub first_neighbors: IndexSet<V>,
    pub second_neighbors: IndexSet<V>,
    pub out_degree: usize,
    pub second_degree: usize,
    pub is_seymour: bool,
    /// `second_degree / max(out_degree, 1)`
    pub ratio: f64,
}

impl<V: VertexId> VertexAnalysis<V> {
    /// Build from the raw out-neighbors of `vertex` and the raw targets of
    /// edges leaving those out-neighbors. Duplicates, `vertex` itself and the
    /// first neighbors are removed from the second neighborhood here.
    fn from_raw<F, S>(vertex: &V, first: F, two_hop: impl Fn(&V) -> S) -> Self
    where
        F: IntoIterator<Item = V>,
        S: IntoIterator<Item = V>,
    {
        let first_neighbors: IndexSet<V> = first.into_iter().filter(|w| w != vertex).collect();

        let mut second_neighbors = IndexSet::new();
        for u in &first_neighbors {
            for w in two_hop(u) {
                if &w != vertex && !first_neighbors.contains(&w) {
                    second_neighbors.insert(w);
                }
            }
        }

        let out_degree = first_neighbors.len();
        let second_degree = second_neighbors.len();
        Self {
            first_neighbors,
            second_neighbors,
            out_degree,
            second_degree,
            is_seymour: second_degree >= out_degree,
            ratio: second_degree as f64 / out_degree.max(1) as f64,
        }
    }
}

/// Snapshot of a graph's adjacency, validated against its vertex list.
struct Snapshot<V: VertexId> {
    order: Vec<V>,
    adjacency: FxHashMap<V, Vec<V>>,
}

impl<V: VertexId> Snapshot<V> {
    fn take<G>(graph: &G) -> Result<Self, GraphError>
    where
        G: DirectedGraph<Vertex = V>,
    {
        let order = graph.vertex_ids();
        let mut adjacency: FxHashMap<V, Vec<V>> = FxHashMap::default();
        adjacency.reserve(order.len());

        for v in &order {
            if adjacency.insert(v.clone(), Vec::new()).is_some() {
                return Err(GraphError::InvalidGraphInput(format!(
                    "vertex {} enumerated more than once",
                    vertex_label(v)
                )));
            }
        }

        for v in &order {
            let targets = graph.out_neighbors(v)?;
            if let Some(w) = targets.iter().find(|w| !adjacency.contains_key(*w)) {
                return Err(dangling_edge(v, w));
            }
            adjacency.insert(v.clone(), targets);
        }

        Ok(Self { order, adjacency })
    }

    fn successors(&self, v: &V) -> Vec<V> {
        self.adjacency.get(v).cloned().unwrap_or_default()
    }
}

/// Classify every vertex of `graph`.
///
/// The key set of the result equals the graph's vertex set, in the graph's
/// enumeration order. Self-loops never count as neighbors.
///
/// # Errors
/// - `InvalidGraphInput` if the graph enumerates a vertex twice or reports an
///   out-neighbor that is not one of its vertices
/// - whatever the graph's `out_neighbors` reports for its own vertices
pub fn analyze<G: DirectedGraph>(graph: &G) -> Result<Analysis<G::Vertex>, GraphError> {
    let snapshot = Snapshot::take(graph)?;

    let mut analysis = IndexMap::with_capacity(snapshot.order.len());
    for v in &snapshot.order {
        let result =
            VertexAnalysis::from_raw(v, snapshot.successors(v), |u| snapshot.successors(u));
        analysis.insert(v.clone(), result);
    }
    Ok(analysis)
}

/// Classify a single vertex without analyzing the rest of the graph.
///
/// # Errors
/// - `UnknownVertex` (or the graph's own lookup error) if `vertex` is absent
/// - `InvalidGraphInput` if a first- or second-hop target is not one of the
///   graph's vertices
pub fn analyze_vertex<G: DirectedGraph>(
    graph: &G,
    vertex: &G::Vertex,
) -> Result<VertexAnalysis<G::Vertex>, GraphError> {
    let first = graph.out_neighbors(vertex)?;

    let known: FxHashSet<G::Vertex> = graph.vertex_ids().into_iter().collect();
    if !known.contains(vertex) {
        return Err(GraphError::UnknownVertex(vertex_label(vertex)));
    }
    check_targets(&known, vertex, &first)?;

    // Second hop lookups happen inside the closure, so collect them up front
    // to keep error propagation out of `from_raw`.
    let mut two_hop: FxHashMap<G::Vertex, Vec<G::Vertex>> = FxHashMap::default();
    for u in &first {
        if u != vertex && !two_hop.contains_key(u) {
            let targets = graph.out_neighbors(u)?;
            check_targets(&known, u, &targets)?;
            two_hop.insert(u.clone(), targets);
        }
    }

    Ok(VertexAnalysis::from_raw(vertex, first, |u| {
        two_hop.get(u).cloned().unwrap_or_default()
    }))
}

fn check_targets<V: VertexId>(
    known: &FxHashSet<V>,
    source: &V,
    targets: &[V],
) -> Result<(), GraphError> {
    match targets.iter().find(|w| !known.contains(*w)) {
        Some(w) => Err(dangling_edge(source, w)),
        None => Ok(()),
    }
}

fn dangling_edge<V: VertexId>(source: &V, target: &V) -> GraphError {
    GraphError::InvalidGraphInput(format!(
        "edge {} -> {} points outside the vertex set",
        vertex_label(source),
        vertex_label(target)
    ))
}

/// Number of Seymour vertices in `graph`.
pub fn count_seymour_vertices<G: DirectedGraph>(graph: &G) -> Result<usize, GraphError> {
    Ok(analyze(graph)?.values().filter(|a| a.is_seymour).count())
}

/// Seymour vertices in enumeration order.
pub fn seymour_vertices<G: DirectedGraph>(graph: &G) -> Result<Vec<G::Vertex>, GraphError> {
    Ok(analyze(graph)?
        .into_iter()
        .filter(|(_, a)| a.is_seymour)
        .map(|(v, _)| v)
        .collect())
}

/// Vertices failing the inequality, in enumeration order.
pub fn non_seymour_vertices<G: DirectedGraph>(graph: &G) -> Result<Vec<G::Vertex>, GraphError> {
    Ok(analyze(graph)?
        .into_iter()
        .filter(|(_, a)| !a.is_seymour)
        .map(|(v, _)| v)
        .collect())
}

/// Validate that all edges reference valid node indices.
fn validate_edges(edges: &[(u32, u32)], num_nodes: u32) -> Result<(), GraphError> {
    for &(src, dst) in edges {
        if src >= num_nodes {
            return Err(GraphError::NodeOutOfBounds(src, num_nodes));
        }
        if dst >= num_nodes {
            return Err(GraphError::NodeOutOfBounds(dst, num_nodes));
        }
    }
    Ok(())
}

/// Analyze a graph given as nodes `0..num_nodes` and an edge list.
///
/// # Errors
/// - `NodeOutOfBounds` if any edge references a node >= num_nodes
/// - `InvalidParameter` if `num_nodes` does not fit in a `u32`
pub fn analyze_edges(edges: &[(u32, u32)], num_nodes: usize) -> Result<Analysis<u32>, GraphError> {
    if num_nodes == 0 {
        if let Some(&(src, _)) = edges.first() {
            return Err(GraphError::NodeOutOfBounds(src, 0));
        }
        return Ok(IndexMap::new());
    }

    let n = u32::try_from(num_nodes).map_err(|_| {
        GraphError::InvalidParameter(format!("{} nodes exceeds the u32 id space", num_nodes))
    })?;
    validate_edges(edges, n)?;

    let mut graph = Digraph::with_vertices(0..n);
    for &(src, dst) in edges {
        graph.add_edge(src, dst)?;
    }
    analyze(&graph)
}

// ============================================================================
// TESTS
// ============================================================================
