// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

use crate::graph::PeopleGraph;

/// Size of the graph an analysis ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

impl From<&PeopleGraph> for GraphStats {
    fn from(graph: &PeopleGraph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        }
    }
}

/// Headline numbers of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "analysis", rename_all = "snake_case")]
pub enum AnalysisSummary {
    Degree {
        max_degree: usize,
        max_in_degree: usize,
        max_out_degree: usize,
    },
    PageRank {
        total_steps: u64,
        visited: usize,
        converged: bool,
        top: Option<String>,
    },
    Coreness {
        levels: usize,
        max_coreness: Option<usize>,
    },
}

impl AnalysisSummary {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Degree { .. } => "degree",
            Self::PageRank { .. } => "pagerank",
            Self::Coreness { .. } => "coreness",
        }
    }
}

/// Result of running one analysis end to end.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub graph: GraphStats,
    pub summary: AnalysisSummary,
    /// Files written, in write order.
    pub outputs: Vec<PathBuf>,
    pub duration_ms: u128,
}
