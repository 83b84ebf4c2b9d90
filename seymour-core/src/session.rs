//! Editing session and "eliminate every Seymour vertex" game state
//!
//! `GameSession` is plain owned state: the current graph, a move counter,
//! the game-mode flag, a win latch and the edit policy. The analyzer is
//! called fresh after every successful move; nothing is cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analyzer::{analyze, Analysis};
use crate::errors::GraphError;
use crate::generate::{generate, RandomGraphConfig};
use crate::graph::Digraph;
use crate::summary::AnalysisSummary;

/// What to do when a new edge `u -> v` meets an existing `v -> u`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutualEdgePolicy {
    /// Flip the existing edge instead of creating a 2-cycle
    #[default]
    Reverse,
    /// Refuse the edge
    Reject,
    /// Add it anyway (the graph leaves the oriented class)
    Allow,
}

impl FromStr for MutualEdgePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reverse" => Ok(MutualEdgePolicy::Reverse),
            "reject" => Ok(MutualEdgePolicy::Reject),
            "allow" => Ok(MutualEdgePolicy::Allow),
            _ => Err(format!(
                "Unknown mutual edge policy '{}'. Valid values: reverse, reject, allow",
                s
            )),
        }
    }
}

impl fmt::Display for MutualEdgePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutualEdgePolicy::Reverse => write!(f, "reverse"),
            MutualEdgePolicy::Reject => write!(f, "reject"),
            MutualEdgePolicy::Allow => write!(f, "allow"),
        }
    }
}

/// Editor rules applied by [`GameSession::apply`]. Self-loops are always refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditPolicy {
    pub mutual_edges: MutualEdgePolicy,
}

/// A single user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Move {
    AddVertex,
    RemoveVertex(u32),
    AddEdge(u32, u32),
    RemoveEdge(u32, u32),
    ReverseEdge(u32, u32),
    Clear,
    Randomize(RandomGraphConfig),
}

/// What a move actually did to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    VertexAdded(u32),
    VertexRemoved(u32),
    EdgeAdded(u32, u32),
    EdgeRemoved(u32, u32),
    /// The edge now points `from -> to`
    EdgeReversed { from: u32, to: u32 },
    Cleared,
    Randomized { vertices: usize, edges: usize },
    /// The edge was already there
    EdgeExists(u32, u32),
}

impl MoveOutcome {
    pub fn changed_graph(&self) -> bool {
        !matches!(self, MoveOutcome::EdgeExists(..))
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::VertexAdded(v) => write!(f, "Added vertex {}", v),
            MoveOutcome::VertexRemoved(v) => write!(f, "Removed vertex {}", v),
            MoveOutcome::EdgeAdded(u, v) => write!(f, "Created edge {} → {}", u, v),
            MoveOutcome::EdgeRemoved(u, v) => write!(f, "Removed edge {} → {}", u, v),
            MoveOutcome::EdgeReversed { from, to } => {
                write!(f, "Reversed edge: now {} → {}", from, to)
            }
            MoveOutcome::Cleared => write!(f, "Cleared graph"),
            MoveOutcome::Randomized { vertices, edges } => {
                write!(f, "Random graph with {} vertices and {} edges", vertices, edges)
            }
            MoveOutcome::EdgeExists(u, v) => write!(f, "Edge already exists: {} → {}", u, v),
        }
    }
}

/// Mutable state behind the editor and the game.
#[derive(Debug, Clone)]
pub struct GameSession {
    graph: Digraph<u32>,
    moves: u32,
    game_mode: bool,
    won: bool,
    policy: EditPolicy,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session on the starter graph: 0 → 1 → 2 → 0 plus 1 → 3.
    pub fn new() -> Self {
        Self::with_graph(Self::starter_graph())
    }

    pub fn with_graph(graph: Digraph<u32>) -> Self {
        Self {
            graph,
            moves: 0,
            game_mode: false,
            won: false,
            policy: EditPolicy::default(),
        }
    }

    pub fn starter_graph() -> Digraph<u32> {
        Digraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)])
    }

    pub fn with_policy(mut self, policy: EditPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn graph(&self) -> &Digraph<u32> {
        &self.graph
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_mode(&self) -> bool {
        self.game_mode
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    /// Turning game mode on re-checks the win condition for the current graph.
    pub fn set_game_mode(&mut self, on: bool) -> Result<(), GraphError> {
        self.game_mode = on;
        self.check_win()
    }

    /// Zero the move counter and clear the win latch.
    pub fn reset_game(&mut self) {
        self.moves = 0;
        self.won = false;
    }

    pub fn analysis(&self) -> Result<Analysis<u32>, GraphError> {
        analyze(&self.graph)
    }

    pub fn summary(&self) -> Result<AnalysisSummary<u32>, GraphError> {
        AnalysisSummary::of(&self.graph)
    }

    /// Apply one edit.
    ///
    /// Rejected moves leave the graph, the counter and the latch untouched.
    /// Moves that change the graph count while game mode is on.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, GraphError> {
        let outcome = self.mutate(mv)?;
        if outcome.changed_graph() {
            if self.game_mode {
                self.moves += 1;
            }
            self.check_win()?;
        }
        Ok(outcome)
    }

    fn mutate(&mut self, mv: Move) -> Result<MoveOutcome, GraphError> {
        match mv {
            Move::AddVertex => {
                let id = self.graph.next_vertex_id();
                self.graph.add_vertex(id);
                Ok(MoveOutcome::VertexAdded(id))
            }
            Move::RemoveVertex(v) => {
                if !self.graph.remove_vertex(&v) {
                    return Err(GraphError::UnknownVertex(v.to_string()));
                }
                Ok(MoveOutcome::VertexRemoved(v))
            }
            Move::AddEdge(u, v) => self.add_edge(u, v),
            Move::RemoveEdge(u, v) => {
                if !self.graph.remove_edge(&u, &v) {
                    return Err(GraphError::MissingEdge(u.to_string(), v.to_string()));
                }
                Ok(MoveOutcome::EdgeRemoved(u, v))
            }
            Move::ReverseEdge(u, v) => {
                self.graph.reverse_edge(&u, &v)?;
                Ok(MoveOutcome::EdgeReversed { from: v, to: u })
            }
            Move::Clear => {
                self.graph.clear();
                Ok(MoveOutcome::Cleared)
            }
            Move::Randomize(config) => {
                self.graph = generate(&config)?;
                Ok(MoveOutcome::Randomized {
                    vertices: self.graph.vertex_count(),
                    edges: self.graph.edge_count(),
                })
            }
        }
    }

    fn add_edge(&mut self, u: u32, v: u32) -> Result<MoveOutcome, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(u.to_string()));
        }
        for endpoint in [u, v] {
            if !self.graph.contains_vertex(&endpoint) {
                return Err(GraphError::UnknownVertex(endpoint.to_string()));
            }
        }
        if self.graph.has_edge(&u, &v) {
            return Ok(MoveOutcome::EdgeExists(u, v));
        }
        if self.graph.has_edge(&v, &u) {
            match self.policy.mutual_edges {
                MutualEdgePolicy::Reverse => {
                    self.graph.reverse_edge(&v, &u)?;
                    return Ok(MoveOutcome::EdgeReversed { from: u, to: v });
                }
                MutualEdgePolicy::Reject => {
                    return Err(GraphError::MutualEdge(u.to_string(), v.to_string()));
                }
                MutualEdgePolicy::Allow => {}
            }
        }
        self.graph.add_edge(u, v)?;
        Ok(MoveOutcome::EdgeAdded(u, v))
    }

    fn check_win(&mut self) -> Result<(), GraphError> {
        if self.game_mode && self.summary()?.all_eliminated() {
            self.won = true;
        }
        Ok(())
    }
}
