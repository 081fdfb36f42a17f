// src/graph/mod.rs
//! The in-memory people graph shared by every analysis.
//!
//! Nodes are interned into dense ids `0..n` in first-seen order while the edge
//! file is read (source before target on each line). That order is the
//! deterministic tie-break used by every ranking in the crate.
//!
//! Outgoing adjacency is stored as compressed rows (`offsets` + `targets`) so a
//! graph with tens of millions of edges stays at one `usize` per edge.

pub mod builder;
pub mod loader;
pub mod occupations;

pub use builder::GraphBuilder;
pub use occupations::OccupationCatalog;

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

/// Dense node identifier, an index into the graph's node table.
pub type NodeId = usize;

/// Directed people graph with per-node in-degree tallies.
///
/// The node table and the lookup index share one allocation per name.
#[derive(Debug, Clone, Default)]
pub struct PeopleGraph {
    pub(crate) names: Vec<Arc<str>>,
    pub(crate) index: HashMap<Arc<str>, NodeId>,
    pub(crate) offsets: Vec<usize>,
    pub(crate) targets: Vec<NodeId>,
    pub(crate) in_degree: Vec<usize>,
}

impl PeopleGraph {
    /// Number of people in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of real (non-sink) edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All node ids in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.names.len()
    }

    /// The person token for `node`.
    ///
    /// # Panics
    /// Panics if `node` is not an id of this graph.
    #[must_use]
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node]
    }

    /// Looks up the id of a person token.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Outgoing targets of `node`, in the order they appeared in the input.
    #[must_use]
    pub fn targets(&self, node: NodeId) -> &[NodeId] {
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }

    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.offsets[node + 1] - self.offsets[node]
    }

    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_degree[node]
    }

    /// In-degree of every node, indexed by id.
    #[must_use]
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    /// Iterates over every real edge as `(source, target)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes()
            .flat_map(move |source| self.targets(source).iter().map(move |&t| (source, t)))
    }
}
