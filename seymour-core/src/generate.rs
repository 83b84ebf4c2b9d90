//! Random oriented graphs
//!
//! Every unordered pair `{i, j}` gets an edge with probability `p`, and the
//! direction of that edge is a fair coin flip. The result never contains a
//! self-loop or a 2-cycle.
//!
//! Seeded generation uses ChaCha8 so the same seed yields the same graph on
//! every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::graph::Digraph;

pub const DEFAULT_NODES: usize = 6;
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.3;

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraphConfig {
    pub nodes: usize,
    pub edge_probability: f64,
    pub seed: Option<u64>,
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            seed: None,
        }
    }
}

impl RandomGraphConfig {
    /// # Errors
    /// - `InvalidParameter` if the probability is not in [0, 1] or the node
    ///   count does not fit in a `u32`
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.edge_probability.is_finite() || !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::InvalidParameter(format!(
                "edge probability must be in [0, 1], got {}",
                self.edge_probability
            )));
        }
        if u32::try_from(self.nodes).is_err() {
            return Err(GraphError::InvalidParameter(format!(
                "{} nodes exceeds the u32 id space",
                self.nodes
            )));
        }
        Ok(())
    }
}

/// Generate a random oriented graph on vertices `0..nodes`.
pub fn generate(config: &RandomGraphConfig) -> Result<Digraph<u32>, GraphError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let n = config.nodes as u32;
    let mut graph = Digraph::with_vertices(0..n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(config.edge_probability) {
                let (src, dst) = if rng.gen_bool(0.5) { (i, j) } else { (j, i) };
                graph.add_edge(src, dst)?;
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(nodes: usize, p: f64, seed: u64) -> RandomGraphConfig {
        RandomGraphConfig {
            nodes,
            edge_probability: p,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_defaults() {
        let config = RandomGraphConfig::default();
        assert_eq!(config.nodes, 6);
        assert_eq!(config.edge_probability, 0.3);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_invalid_probability() {
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let result = generate(&seeded(4, p, 1));
            assert!(
                matches!(result, Err(GraphError::InvalidParameter(_))),
                "p = {}",
                p
            );
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = generate(&seeded(20, 0.4, 42)).unwrap();
        let b = generate(&seeded(20, 0.4, 42)).unwrap();
        assert_eq!(
            a.edges().collect::<Vec<_>>(),
            b.edges().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_always_oriented() {
        for seed in 0..20 {
            let g = generate(&seeded(15, 0.8, seed)).unwrap();
            assert!(g.is_oriented(), "seed {}", seed);
            assert_eq!(g.vertex_count(), 15);
        }
    }

    #[test]
    fn test_probability_extremes() {
        let empty = generate(&seeded(8, 0.0, 7)).unwrap();
        assert_eq!(empty.edge_count(), 0);

        // p = 1 gives a tournament: one edge per unordered pair
        let tournament = generate(&seeded(8, 1.0, 7)).unwrap();
        assert_eq!(tournament.edge_count(), 8 * 7 / 2);
    }

    #[test]
    fn test_zero_nodes() {
        let g = generate(&seeded(0, 0.5, 3)).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_unseeded_generates() {
        let g = generate(&RandomGraphConfig::default()).unwrap();
        assert_eq!(g.vertex_count(), DEFAULT_NODES);
        assert!(g.is_oriented());
    }
}
