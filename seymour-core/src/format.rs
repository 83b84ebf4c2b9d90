//! Graph file format
//!
//! ```json
//! { "nodes": [0, 1, 2, 3], "edges": [[0, 1], [1, 2], [2, 0], [1, 3]] }
//! ```
//!
//! `nodes` lists every vertex (isolated ones included); each edge must
//! reference listed nodes.

use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::graph::{Digraph, VertexId};

/// Serialized form of a [`Digraph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "V: Deserialize<'de>"))]
pub struct GraphData<V> {
    #[serde(default)]
    pub nodes: Vec<V>,
    #[serde(default)]
    pub edges: Vec<(V, V)>,
}

impl<V: VertexId> GraphData<V> {
    pub fn from_graph(graph: &Digraph<V>) -> Self {
        Self {
            nodes: graph.vertices().cloned().collect(),
            edges: graph
                .edges()
                .map(|(u, v)| (u.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn into_graph(self) -> Result<Digraph<V>, GraphError> {
        Digraph::from_parts(self.nodes, self.edges)
    }
}

impl<V> Serialize for Digraph<V>
where
    V: VertexId + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GraphData::from_graph(self).serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for Digraph<V>
where
    V: VertexId + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        GraphData::<V>::deserialize(deserializer)?
            .into_graph()
            .map_err(serde::de::Error::custom)
    }
}

/// Parse a graph from JSON text.
///
/// # Errors
/// - `InvalidGraphInput` on malformed JSON or edges to unlisted nodes
pub fn from_json<V>(json: &str) -> Result<Digraph<V>, GraphError>
where
    V: VertexId + DeserializeOwned,
{
    serde_json::from_str(json).map_err(|e| GraphError::InvalidGraphInput(e.to_string()))
}

/// Pretty-printed JSON for a graph.
pub fn to_json<V>(graph: &Digraph<V>) -> Result<String, GraphError>
where
    V: VertexId + Serialize,
{
    serde_json::to_string_pretty(graph).map_err(|e| GraphError::InvalidGraphInput(e.to_string()))
}
