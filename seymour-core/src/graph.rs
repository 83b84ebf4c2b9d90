//! Directed graph with explicit adjacency
//!
//! `Digraph<V>` owns a mapping from each vertex to its ordered out-neighbor
//! set. Insertion order is preserved everywhere, so reports and tests see a
//! deterministic vertex order.
//!
//! The graph only enforces referential integrity: every edge endpoint is a
//! vertex. Self-loops and mutual pairs (2-cycles) are representable; whether
//! an editor allows them is decided by [`crate::session::EditPolicy`].

use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction::Outgoing;
use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::GraphError;

/// Anything usable as a vertex identifier.
pub trait VertexId: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> VertexId for T {}

/// Read-only view the analyzer needs from a graph.
///
/// Implementations must enumerate every vertex exactly once and only report
/// out-neighbors that are themselves enumerated vertices.
pub trait DirectedGraph {
    type Vertex: VertexId;

    /// All vertices, in a stable order
    fn vertex_ids(&self) -> Vec<Self::Vertex>;

    /// Targets of the edges leaving `vertex`
    fn out_neighbors(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Vertex>, GraphError>;
}

pub(crate) fn vertex_label<V: Debug>(v: &V) -> String {
    format!("{:?}", v)
}

/// A finite directed graph stored as an adjacency map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<V: VertexId> {
    adjacency: IndexMap<V, IndexSet<V>>,
}

impl<V: VertexId> Default for Digraph<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: VertexId> Digraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with the given vertices and no edges
    pub fn with_vertices<I: IntoIterator<Item = V>>(vertices: I) -> Self {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Graph from an edge list; endpoints are added as vertices on first use.
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_vertex(u.clone());
            graph.add_vertex(v.clone());
            graph
                .adjacency
                .entry(u)
                .or_default()
                .insert(v);
        }
        graph
    }

    /// Graph from an explicit vertex list and edge list.
    ///
    /// # Errors
    /// - `InvalidGraphInput` if a vertex is listed twice or an edge references
    ///   a vertex that is not listed
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Result<Self, GraphError>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for v in nodes {
            let label = vertex_label(&v);
            if !graph.add_vertex(v) {
                return Err(GraphError::InvalidGraphInput(format!(
                    "vertex {} listed more than once",
                    label
                )));
            }
        }
        for (u, v) in edges {
            graph.add_edge(u, v).map_err(|e| match e {
                GraphError::UnknownVertex(name) => GraphError::InvalidGraphInput(format!(
                    "edge references vertex {} which is not in the node list",
                    name
                )),
                other => other,
            })?;
        }
        Ok(graph)
    }

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, IndexSet::new());
        true
    }

    /// Remove a vertex and every edge touching it. Returns false if absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if self.adjacency.shift_remove(v).is_none() {
            return false;
        }
        for targets in self.adjacency.values_mut() {
            targets.shift_remove(v);
        }
        true
    }

    /// Add edge `u -> v`. Returns false if it already existed.
    ///
    /// # Errors
    /// - `UnknownVertex` if either endpoint is not in the graph
    pub fn add_edge(&mut self, u: V, v: V) -> Result<bool, GraphError> {
        if !self.adjacency.contains_key(&v) {
            return Err(GraphError::UnknownVertex(vertex_label(&v)));
        }
        let targets = self
            .adjacency
            .get_mut(&u)
            .ok_or_else(|| GraphError::UnknownVertex(vertex_label(&u)))?;
        Ok(targets.insert(v))
    }

    /// Remove edge `u -> v`. Returns false if it did not exist.
    pub fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        self.adjacency
            .get_mut(u)
            .map_or(false, |targets| targets.shift_remove(v))
    }

    /// Replace `u -> v` with `v -> u`.
    ///
    /// # Errors
    /// - `MissingEdge` if `u -> v` does not exist
    pub fn reverse_edge(&mut self, u: &V, v: &V) -> Result<(), GraphError> {
        if !self.remove_edge(u, v) {
            return Err(GraphError::MissingEdge(vertex_label(u), vertex_label(v)));
        }
        self.add_edge(v.clone(), u.clone())?;
        Ok(())
    }

    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    pub fn has_edge(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .map_or(false, |targets| targets.contains(v))
    }

    /// Out-neighbors of `v` (empty if `v` is not a vertex)
    pub fn successors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency.get(v).into_iter().flatten()
    }

    pub fn out_degree(&self, v: &V) -> Option<usize> {
        self.adjacency.get(v).map(IndexSet::len)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency
            .iter()
            .flat_map(|(u, targets)| targets.iter().map(move |v| (u, v)))
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Each 2-cycle `{u, v}` once, as `(u, v)` with `u` inserted before `v`.
    pub fn mutual_pairs(&self) -> Vec<(V, V)> {
        let mut pairs = Vec::new();
        for (i, (u, targets)) in self.adjacency.iter().enumerate() {
            for v in targets {
                let later = self
                    .adjacency
                    .get_index_of(v)
                    .map_or(false, |j| j > i);
                if later && self.has_edge(v, u) {
                    pairs.push((u.clone(), v.clone()));
                }
            }
        }
        pairs
    }

    /// Vertices carrying an edge to themselves
    pub fn self_loops(&self) -> Vec<V> {
        self.adjacency
            .iter()
            .filter(|(v, targets)| targets.contains(*v))
            .map(|(v, _)| v.clone())
            .collect()
    }

    /// No self-loops and no 2-cycles: the class of graphs the conjecture is about.
    pub fn is_oriented(&self) -> bool {
        self.self_loops().is_empty() && self.mutual_pairs().is_empty()
    }

    /// Copy into a petgraph `DiGraph`, vertex ids as node weights.
    pub fn to_petgraph(&self) -> DiGraph<V, ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let indices: Vec<NodeIndex> = self
            .adjacency
            .keys()
            .map(|v| graph.add_node(v.clone()))
            .collect();
        for (i, targets) in self.adjacency.values().enumerate() {
            for v in targets {
                if let Some(j) = self.adjacency.get_index_of(v) {
                    graph.add_edge(indices[i], indices[j], ());
                }
            }
        }
        graph
    }
}

impl Digraph<u32> {
    /// Smallest id greater than every existing vertex (0 for an empty graph)
    pub fn next_vertex_id(&self) -> u32 {
        self.adjacency
            .keys()
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }
}

impl<V: VertexId> DirectedGraph for Digraph<V> {
    type Vertex = V;

    fn vertex_ids(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn out_neighbors(&self, vertex: &V) -> Result<Vec<V>, GraphError> {
        self.adjacency
            .get(vertex)
            .map(|targets| targets.iter().cloned().collect())
            .ok_or_else(|| GraphError::UnknownVertex(vertex_label(vertex)))
    }
}

impl<N, E> DirectedGraph for DiGraph<N, E> {
    type Vertex = NodeIndex;

    fn vertex_ids(&self) -> Vec<NodeIndex> {
        self.node_indices().collect()
    }

    fn out_neighbors(&self, vertex: &NodeIndex) -> Result<Vec<NodeIndex>, GraphError> {
        if vertex.index() >= self.node_count() {
            return Err(GraphError::NodeOutOfBounds(
                vertex.index() as u32,
                self.node_count() as u32,
            ));
        }
        Ok(self.neighbors_directed(*vertex, Outgoing).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Digraph<&'static str> {
        Digraph::from_edges([("a", "b"), ("b", "c"), ("c", "a")])
    }

    #[test]
    fn test_from_edges_adds_endpoints() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(g.has_edge(&"a", &"b"));
        assert!(!g.has_edge(&"b", &"a"));
    }

    #[test]
    fn test_from_parts_rejects_dangling_edge() {
        let result = Digraph::from_parts([0u32, 1], [(0, 2)]);
        assert!(matches!(result, Err(GraphError::InvalidGraphInput(_))));
    }

    #[test]
    fn test_from_parts_rejects_duplicate_vertex() {
        let result = Digraph::from_parts([0u32, 1, 1], []);
        assert!(matches!(result, Err(GraphError::InvalidGraphInput(_))));
    }

    #[test]
    fn test_add_edge_unknown_vertex() {
        let mut g = Digraph::with_vertices([0u32]);
        assert_eq!(
            g.add_edge(0, 7),
            Err(GraphError::UnknownVertex("7".into()))
        );
        assert_eq!(
            g.add_edge(7, 0),
            Err(GraphError::UnknownVertex("7".into()))
        );
    }

    #[test]
    fn test_add_edge_twice() {
        let mut g = Digraph::with_vertices([0u32, 1]);
        assert_eq!(g.add_edge(0, 1), Ok(true));
        assert_eq!(g.add_edge(0, 1), Ok(false));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut g = triangle();
        assert!(g.remove_vertex(&"b"));
        assert!(!g.remove_vertex(&"b"));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(&"c", &"a")]);
    }

    #[test]
    fn test_reverse_edge() {
        let mut g = triangle();
        g.reverse_edge(&"a", &"b").unwrap();
        assert!(g.has_edge(&"b", &"a"));
        assert!(!g.has_edge(&"a", &"b"));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_reverse_missing_edge() {
        let mut g = triangle();
        assert_eq!(
            g.reverse_edge(&"b", &"a"),
            Err(GraphError::MissingEdge("\"b\"".into(), "\"a\"".into()))
        );
    }

    #[test]
    fn test_mutual_pairs_and_self_loops() {
        let g = Digraph::from_edges([(0u32, 1), (1, 0), (1, 2), (2, 2)]);
        assert_eq!(g.mutual_pairs(), vec![(0, 1)]);
        assert_eq!(g.self_loops(), vec![2]);
        assert!(!g.is_oriented());
        assert!(triangle().is_oriented());
    }

    #[test]
    fn test_next_vertex_id() {
        assert_eq!(Digraph::<u32>::new().next_vertex_id(), 0);
        assert_eq!(Digraph::with_vertices([3u32, 0, 9]).next_vertex_id(), 10);
    }

    #[test]
    fn test_successors_of_unknown_vertex_is_empty() {
        let g = triangle();
        assert_eq!(g.successors(&"z").count(), 0);
        assert_eq!(g.out_degree(&"z"), None);
        assert_eq!(g.out_degree(&"a"), Some(1));
    }

    #[test]
    fn test_to_petgraph_preserves_structure() {
        let g = triangle();
        let pg = g.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 3);
        let a = pg.node_indices().find(|&i| pg[i] == "a").unwrap();
        let targets: Vec<_> = pg.neighbors(a).map(|i| pg[i]).collect();
        assert_eq!(targets, vec!["b"]);
    }

    #[test]
    fn test_directed_graph_impl_unknown_vertex() {
        let g = triangle();
        assert!(matches!(
            g.out_neighbors(&"z"),
            Err(GraphError::UnknownVertex(_))
        ));
    }

    #[test]
    fn test_petgraph_out_of_bounds() {
        let pg: DiGraph<(), ()> = DiGraph::new();
        assert_eq!(
            pg.out_neighbors(&NodeIndex::new(2)),
            Err(GraphError::NodeOutOfBounds(2, 0))
        );
    }
}
