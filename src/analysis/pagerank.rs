// src/analysis/pagerank.rs
//! Approximate `PageRank` by direct random-surfer simulation.
//!
//! The walk counts visits per node and stops once every node has been visited
//! at least `min_visits` times. This is a convergence heuristic, not a bound on
//! the numerical error of the estimate.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, PeopleGraph};

const PROGRESS_EVERY: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Probability of teleporting to a uniformly random node at each step.
    #[serde(default = "default_teleport")]
    pub teleport_probability: f64,
    /// Visits every node must reach before the walk stops.
    #[serde(default = "default_min_visits")]
    pub min_visits: u64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Hard cap on recorded visits; `None` walks until every node is satisfied.
    #[serde(default)]
    pub max_steps: Option<u64>,
}

fn default_teleport() -> f64 { 0.1 }
const fn default_min_visits() -> u64 { 500 }
const fn default_seed() -> u64 { 123 }

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            teleport_probability: default_teleport(),
            min_visits: default_min_visits(),
            seed: default_seed(),
            max_steps: None,
        }
    }
}

impl PageRankConfig {
    /// # Errors
    /// Returns `InvalidParameter` for a teleport probability outside `[0, 1]`,
    /// a zero visit threshold or a zero step cap.
    pub fn validate(&self) -> Result<()> {
        if !self.teleport_probability.is_finite() {
            return Err(GraphError::InvalidParameter(
                "teleport_probability must be finite".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.teleport_probability) {
            return Err(GraphError::InvalidParameter(
                "teleport_probability must be in [0,1]".to_string(),
            ));
        }
        if self.min_visits == 0 {
            return Err(GraphError::InvalidParameter(
                "min_visits must be > 0".to_string(),
            ));
        }
        if self.max_steps == Some(0) {
            return Err(GraphError::InvalidParameter(
                "max_steps must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a finished walk.
#[derive(Debug, Clone)]
pub struct PageRankRun {
    /// Visit tally per node, indexed by [`NodeId`].
    pub visits: Vec<u64>,
    /// Number of recorded visits; equals the sum of `visits`.
    pub total_steps: u64,
    /// Number of nodes that reached `min_visits`.
    pub satisfied: usize,
    /// False when `max_steps` stopped the walk first.
    pub converged: bool,
}

impl PageRankRun {
    /// `visits / total_steps` for one node.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn score(&self, node: NodeId) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        self.visits[node] as f64 / self.total_steps as f64
    }

    /// `(visits, score, node)` for every visited node, descending by visits;
    /// ties keep first-seen order. Unvisited nodes are absent.
    #[must_use]
    pub fn ranked(&self) -> Vec<(u64, f64, NodeId)> {
        let mut ranked: Vec<(u64, f64, NodeId)> = self
            .visits
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0)
            .map(|(node, &v)| (v, self.score(node), node))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked
    }
}

/// A single random surfer with its own seeded generator.
#[derive(Debug)]
pub struct Simulator<'g> {
    graph: &'g PeopleGraph,
    config: PageRankConfig,
    rng: ChaCha8Rng,
    current: NodeId,
    visits: Vec<u64>,
    total_steps: u64,
    satisfied: usize,
}

impl<'g> Simulator<'g> {
    /// Seeds the generator and draws the start node.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if the config does not validate.
    pub fn new(graph: &'g PeopleGraph, config: PageRankConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let current = if graph.is_empty() {
            0
        } else {
            rng.gen_range(0..graph.node_count())
        };
        Ok(Self {
            graph,
            config,
            rng,
            current,
            visits: vec![0; graph.node_count()],
            total_steps: 0,
            satisfied: 0,
        })
    }

    #[must_use]
    pub fn current(&self) -> NodeId {
        self.current
    }

    #[must_use]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.satisfied == self.graph.node_count()
    }

    /// Records a visit to the current node and moves on.
    ///
    /// Returns `true` once every node has reached the visit threshold; the walk
    /// does not move after that.
    pub fn step(&mut self) -> bool {
        if self.is_converged() {
            return true;
        }

        let tally = &mut self.visits[self.current];
        *tally += 1;
        self.total_steps += 1;
        if *tally == self.config.min_visits {
            self.satisfied += 1;
            if self.is_converged() {
                return true;
            }
        }

        self.current = self.next_node();
        false
    }

    fn next_node(&mut self) -> NodeId {
        let graph = self.graph;
        let targets = graph.targets(self.current);
        // sinks always teleport without consuming a teleport draw
        if targets.is_empty() || self.rng.gen::<f64>() < self.config.teleport_probability {
            self.rng.gen_range(0..graph.node_count())
        } else {
            targets[self.rng.gen_range(0..targets.len())]
        }
    }

    /// Walks until convergence or until `max_steps` visits were recorded.
    #[must_use]
    pub fn run(mut self) -> PageRankRun {
        let n = self.graph.node_count();
        while !self.is_converged() {
            if self.config.max_steps.is_some_and(|cap| self.total_steps >= cap) {
                break;
            }
            if self.step() {
                break;
            }
            if self.total_steps % PROGRESS_EVERY == 0 {
                debug!(
                    "    {} ({} of {n} visited at least {} times)",
                    self.total_steps, self.satisfied, self.config.min_visits
                );
            }
        }

        PageRankRun {
            converged: self.is_converged(),
            visits: self.visits,
            total_steps: self.total_steps,
            satisfied: self.satisfied,
        }
    }
}

/// Runs a full simulation over `graph`.
///
/// # Errors
/// Returns `InvalidParameter` if the config does not validate.
pub fn simulate(graph: &PeopleGraph, config: PageRankConfig) -> Result<PageRankRun> {
    Ok(Simulator::new(graph, config)?.run())
}
