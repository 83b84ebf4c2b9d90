//! Graph files on disk
//!
//! Graphs are stored as `{"nodes": [...], "edges": [[u, v], ...]}`. Vertex ids
//! may be integers or strings, and one file may mix both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use seymour_core::{format, Digraph};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Vertex id as read from a graph file
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexKey {
    Index(u32),
    Name(String),
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Index(i) => write!(f, "{}", i),
            VertexKey::Name(s) => write!(f, "{}", s),
        }
    }
}

// Error messages in the core quote vertices with `{:?}`
impl fmt::Debug for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexKey::Index(i) => write!(f, "{:?}", i),
            VertexKey::Name(s) => write!(f, "{:?}", s),
        }
    }
}

/// Load any graph file for analysis.
pub fn load_graph(path: &Path) -> Result<Digraph<VertexKey>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let graph = format::from_json(&content)
        .with_context(|| format!("Invalid graph file {}", path.display()))?;
    debug!(
        "Loaded {} ({} vertices, {} edges)",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Load a graph the editor can work on (integer vertex ids only).
pub fn load_editable_graph(path: &Path) -> Result<Digraph<u32>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    format::from_json(&content).with_context(|| {
        format!(
            "Cannot edit {}: the editor needs non-negative integer vertex ids",
            path.display()
        )
    })
}

/// Write a graph as pretty JSON.
pub fn save_graph<V>(graph: &Digraph<V>, path: &Path) -> Result<()>
where
    V: seymour_core::VertexId + Serialize,
{
    let json = format::to_json(graph)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Saved graph to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_vertex_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.json");
        std::fs::write(&path, r#"{"nodes": [0, "x"], "edges": [[0, "x"]]}"#).unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.has_edge(&VertexKey::Index(0), &VertexKey::Name("x".into())));
    }

    #[test]
    fn test_key_formatting() {
        assert_eq!(VertexKey::Index(3).to_string(), "3");
        assert_eq!(VertexKey::Name("a".into()).to_string(), "a");
        assert_eq!(format!("{:?}", VertexKey::Name("a".into())), "\"a\"");
    }

    #[test]
    fn test_editable_graph_rejects_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.json");
        std::fs::write(&path, r#"{"nodes": ["a"], "edges": []}"#).unwrap();
        let err = load_editable_graph(&path).unwrap_err();
        assert!(err.to_string().contains("integer vertex ids"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let graph = Digraph::from_edges([(0u32, 1u32), (1, 2)]);
        save_graph(&graph, &path).unwrap();
        assert_eq!(load_editable_graph(&path).unwrap(), graph);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_graph(Path::new("/nonexistent/graph.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
