// src/graph/builder.rs
//! Graph construction: interning, validation and compressed adjacency.

use std::collections::HashMap;
use std::sync::Arc;

use super::{NodeId, PeopleGraph};
use crate::error::{GraphError, Result};

/// Accumulates edges and sink markers, then freezes them into a [`PeopleGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: Vec<Arc<str>>,
    index: HashMap<Arc<str>, NodeId>,
    is_source: Vec<bool>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next free one on first sight.
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len();
        let name: Arc<str> = Arc::from(name);
        self.index.insert(Arc::clone(&name), id);
        self.names.push(name);
        self.is_source.push(false);
        id
    }

    /// Records a person that may have no outgoing edges.
    pub fn add_sink(&mut self, source: &str) -> NodeId {
        let id = self.intern(source);
        self.is_source[id] = true;
        id
    }

    /// Records the directed edge `source -> target`.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let s = self.add_sink(source);
        let t = self.intern(target);
        self.edges.push((s, t));
    }

    /// Number of edges recorded so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Validates the collected edges and builds the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownTarget`] if a target never appears as a source,
    /// or [`GraphError::DuplicateEdge`] if a `(source, target)` pair repeats.
    pub fn build(self) -> Result<PeopleGraph> {
        if let Some(orphan) = self.is_source.iter().position(|&s| !s) {
            return Err(GraphError::UnknownTarget {
                target: self.names[orphan].to_string(),
            });
        }

        let n = self.names.len();
        let (offsets, targets) = compress(n, &self.edges);
        check_duplicates(&self.names, &offsets, &targets)?;

        let mut in_degree = vec![0usize; n];
        for &t in &targets {
            in_degree[t] += 1;
        }

        Ok(PeopleGraph {
            names: self.names,
            index: self.index,
            offsets,
            targets,
            in_degree,
        })
    }
}

/// Counting sort of edges by source; keeps input order within each row.
fn compress(n: usize, edges: &[(NodeId, NodeId)]) -> (Vec<usize>, Vec<NodeId>) {
    let mut offsets = vec![0usize; n + 1];
    for &(s, _) in edges {
        offsets[s + 1] += 1;
    }
    for i in 0..n {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets.clone();
    let mut targets = vec![0; edges.len()];
    for &(s, t) in edges {
        targets[cursor[s]] = t;
        cursor[s] += 1;
    }
    (offsets, targets)
}

fn check_duplicates(names: &[Arc<str>], offsets: &[usize], targets: &[NodeId]) -> Result<()> {
    let mut row = Vec::new();
    for source in 0..names.len() {
        row.clear();
        row.extend_from_slice(&targets[offsets[source]..offsets[source + 1]]);
        row.sort_unstable();
        if let Some(pair) = row.windows(2).find(|w| w[0] == w[1]) {
            return Err(GraphError::DuplicateEdge {
                source_node: names[source].to_string(),
                target: names[pair[0]].to_string(),
            });
        }
    }
    Ok(())
}
