// src/analysis/degree.rs
//! Degree Analyzer: total, in and out degree per person.

use serde::Serialize;

use crate::graph::{NodeId, PeopleGraph};

/// Degree counts for one person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DegreeRecord {
    pub in_degree: usize,
    pub out_degree: usize,
}

impl DegreeRecord {
    /// Total degree (in + out).
    #[must_use]
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree
    }

    #[must_use]
    pub fn get(&self, kind: DegreeKind) -> usize {
        match kind {
            DegreeKind::Total => self.total(),
            DegreeKind::In => self.in_degree,
            DegreeKind::Out => self.out_degree,
        }
    }
}

/// Which degree a ranking is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeKind {
    Total,
    In,
    Out,
}

impl DegreeKind {
    pub const ALL: [DegreeKind; 3] = [DegreeKind::Total, DegreeKind::In, DegreeKind::Out];
}

/// One record per node of the graph, indexed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct DegreeReport {
    records: Vec<DegreeRecord>,
}

impl DegreeReport {
    #[must_use]
    pub fn records(&self) -> &[DegreeRecord] {
        &self.records
    }

    #[must_use]
    pub fn record(&self, node: NodeId) -> DegreeRecord {
        self.records[node]
    }

    /// `(degree, node)` pairs, descending by degree; ties keep first-seen order.
    #[must_use]
    pub fn ranked(&self, kind: DegreeKind) -> Vec<(usize, NodeId)> {
        let mut ranked: Vec<(usize, NodeId)> = self
            .records
            .iter()
            .enumerate()
            .map(|(node, r)| (r.get(kind), node))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked
    }

    /// Sum of out-degrees, which equals the number of non-sink edges read.
    #[must_use]
    pub fn total_out(&self) -> usize {
        self.records.iter().map(|r| r.out_degree).sum()
    }
}

/// Counts degrees with one pass over every edge.
///
/// Nodes without edges in a direction get an explicit zero, so each node has
/// exactly one entry in every ranking.
#[must_use]
pub fn compute(graph: &PeopleGraph) -> DegreeReport {
    let mut records = vec![DegreeRecord::default(); graph.node_count()];
    for (source, target) in graph.edges() {
        records[source].out_degree += 1;
        records[target].in_degree += 1;
    }
    DegreeReport { records }
}
