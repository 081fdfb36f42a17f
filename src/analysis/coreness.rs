// src/analysis/coreness.rs
//! In-degree k-core decomposition.
//!
//! The k-core is the maximal subgraph in which every node has in-degree of at
//! least k counted inside that subgraph. Removing a node lowers the in-degree of
//! the nodes it links to, so one sweep is not enough: for each k we sweep until
//! a pass removes nothing. A node removed while computing the k-core has
//! coreness k - 1.
//!
//! Present nodes live in a bucket queue indexed by current in-degree. A pass
//! drains buckets from the lowest upward and stops at the first bucket >= k;
//! every node behind it has at least that in-degree, so nothing else can be
//! below the threshold.

use serde::Serialize;
use tracing::{debug, info};

use super::attribution::{self, Attribution};
use crate::graph::{NodeId, OccupationCatalog, PeopleGraph};

/// Nodes peeled while computing one k-core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shell {
    pub k: usize,
    /// Members in removal order.
    pub members: Vec<NodeId>,
    /// Passes that removed at least one node.
    pub passes: usize,
}

impl Shell {
    /// Coreness shared by every member: `k - 1`.
    #[must_use]
    pub fn coreness(&self) -> usize {
        self.k - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Coreness per node plus the shells in the order they were peeled.
#[derive(Debug, Clone, Default)]
pub struct CorenessReport {
    coreness: Vec<usize>,
    shells: Vec<Shell>,
}

impl CorenessReport {
    #[must_use]
    pub fn coreness(&self, node: NodeId) -> usize {
        self.coreness[node]
    }

    /// Coreness of every node, indexed by [`NodeId`].
    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.coreness
    }

    /// One shell per k, ascending, including shells that removed nobody.
    #[must_use]
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    #[must_use]
    pub fn max_coreness(&self) -> Option<usize> {
        self.shells.last().map(Shell::coreness)
    }

    /// `(coreness, node)` descending by coreness; ties keep removal order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(usize, NodeId)> {
        self.shells
            .iter()
            .rev()
            .flat_map(|s| s.members.iter().map(move |&m| (s.coreness(), m)))
            .collect()
    }
}

/// Occupation breakdown of one shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSummary {
    pub coreness: usize,
    pub cohort_size: usize,
    pub attribution: Attribution,
}

/// Present nodes keyed by their current in-degree.
///
/// Entries are never moved out of a bucket when a degree drops; the node is
/// filed again in the lower bucket and the stale entry is skipped on drain.
#[derive(Debug)]
struct DegreeBuckets {
    degree: Vec<usize>,
    present: Vec<bool>,
    buckets: Vec<Vec<NodeId>>,
    /// No present node has a degree below this.
    low: usize,
    remaining: usize,
}

impl DegreeBuckets {
    fn new(in_degrees: &[usize]) -> Self {
        let max = in_degrees.iter().copied().max().unwrap_or(0);
        let mut buckets = vec![Vec::new(); max + 1];
        for (node, &d) in in_degrees.iter().enumerate() {
            buckets[d].push(node);
        }
        Self {
            degree: in_degrees.to_vec(),
            present: vec![true; in_degrees.len()],
            buckets,
            low: 0,
            remaining: in_degrees.len(),
        }
    }

    /// Takes every present node with degree below `k`, lowest degree first.
    fn drain_below(&mut self, k: usize) -> Vec<NodeId> {
        let mut wave = Vec::new();
        while self.low < k && self.low < self.buckets.len() {
            let d = self.low;
            for node in std::mem::take(&mut self.buckets[d]) {
                if self.present[node] && self.degree[node] == d {
                    wave.push(node);
                }
            }
            self.low += 1;
        }
        wave
    }

    /// Removes a whole pass, then lowers the degree of each surviving target.
    fn remove(&mut self, graph: &PeopleGraph, wave: &[NodeId]) {
        for &node in wave {
            self.present[node] = false;
        }
        self.remaining -= wave.len();

        for &node in wave {
            for &target in graph.targets(node) {
                if !self.present[target] {
                    continue;
                }
                debug_assert!(self.degree[target] > 0);
                self.degree[target] -= 1;
                let d = self.degree[target];
                self.buckets[d].push(target);
                self.low = self.low.min(d);
            }
        }
    }
}

/// Assigns every node of `graph` its in-degree coreness.
#[must_use]
pub fn decompose(graph: &PeopleGraph) -> CorenessReport {
    let mut queue = DegreeBuckets::new(graph.in_degrees());
    let mut coreness = vec![0usize; graph.node_count()];
    let mut shells = Vec::new();

    let mut k = 1;
    while queue.remaining > 0 {
        let shell = peel_shell(graph, &mut queue, k);
        for &node in &shell.members {
            coreness[node] = shell.coreness();
        }
        info!(
            "{k}-core: {} have coreness {} ({} left)",
            shell.len(),
            shell.coreness(),
            queue.remaining
        );
        shells.push(shell);
        k += 1;
    }

    CorenessReport { coreness, shells }
}

fn peel_shell(graph: &PeopleGraph, queue: &mut DegreeBuckets, k: usize) -> Shell {
    let mut members = Vec::new();
    let mut passes = 0;
    loop {
        let wave = queue.drain_below(k);
        if wave.is_empty() {
            break;
        }
        passes += 1;
        debug!("    pass {passes}: removing {}", wave.len());
        queue.remove(graph, &wave);
        members.extend(wave);
    }
    Shell { k, members, passes }
}

/// Occupation attribution for every shell, ascending by coreness.
#[must_use]
pub fn summarize(
    report: &CorenessReport,
    graph: &PeopleGraph,
    catalog: &OccupationCatalog,
) -> Vec<ShellSummary> {
    report
        .shells()
        .iter()
        .map(|shell| {
            let tags: Vec<&[String]> = shell
                .members
                .iter()
                .map(|&m| catalog.occupations(graph.name(m)))
                .collect();
            let attribution = attribution::attribute(&tags);
            debug!("    coreness {}: {:?}", shell.coreness(), attribution.buckets);
            ShellSummary {
                coreness: shell.coreness(),
                cohort_size: shell.len(),
                attribution,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn graph(edges: &[(&str, &str)], sinks: &[&str]) -> PeopleGraph {
        let mut b = GraphBuilder::new();
        for (s, t) in edges {
            b.add_edge(s, t);
        }
        for s in sinks {
            b.add_sink(s);
        }
        b.build().unwrap()
    }

    fn coreness_of(g: &PeopleGraph, r: &CorenessReport, name: &str) -> usize {
        r.coreness(g.id(name).unwrap())
    }

    #[test]
    fn cycle_and_sink() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A")], &["D"]);
        let r = decompose(&g);
        assert_eq!(coreness_of(&g, &r, "D"), 0);
        for name in ["A", "B", "C"] {
            assert_eq!(coreness_of(&g, &r, name), 1);
        }
        assert_eq!(r.shells().len(), 2);
        assert_eq!(r.shells()[0].members, vec![g.id("D").unwrap()]);
        assert_eq!(r.shells()[1].len(), 3);
        assert_eq!(r.max_coreness(), Some(1));
    }

    #[test]
    fn chain_peels_in_several_passes() {
        // A -> B -> C -> D: only A starts at in-degree 0
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D")], &["D"]);
        let r = decompose(&g);
        assert!(r.values().iter().all(|&c| c == 0));
        assert_eq!(r.shells().len(), 1);
        assert_eq!(r.shells()[0].passes, 4);
        let order: Vec<&str> = r.shells()[0].members.iter().map(|&m| g.name(m)).collect();
        assert_eq!(order, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn empty_shells_are_kept_until_everyone_is_assigned() {
        let names = ["A", "B", "C", "D"];
        let mut edges = Vec::new();
        for s in names {
            for t in names {
                if s != t {
                    edges.push((s, t));
                }
            }
        }
        let g = graph(&edges, &[]);
        let r = decompose(&g);
        let sizes: Vec<usize> = r.shells().iter().map(Shell::len).collect();
        assert_eq!(sizes, vec![0, 0, 0, 4]);
        assert!(r.values().iter().all(|&c| c == 3));
    }

    #[test]
    fn self_loop_counts_until_removed() {
        let g = graph(&[("A", "A"), ("B", "A")], &[]);
        let r = decompose(&g);
        assert_eq!(coreness_of(&g, &r, "B"), 0);
        // after B goes A keeps only its own loop
        assert_eq!(coreness_of(&g, &r, "A"), 1);
    }

    #[test]
    fn ranked_is_descending_and_partitions_nodes() {
        let g = graph(
            &[("A", "B"), ("B", "C"), ("C", "A"), ("D", "A"), ("E", "D")],
            &[],
        );
        let r = decompose(&g);
        let ranked = r.ranked();
        assert_eq!(ranked.len(), g.node_count());
        assert!(ranked.windows(2).all(|w| w[0].0 >= w[1].0));
        let mut seen: Vec<NodeId> = ranked.iter().map(|&(_, n)| n).collect();
        seen.sort_unstable();
        assert_eq!(seen, g.nodes().collect::<Vec<_>>());
    }

    #[test]
    fn empty_graph_has_no_shells() {
        let r = decompose(&GraphBuilder::new().build().unwrap());
        assert!(r.shells().is_empty());
        assert_eq!(r.max_coreness(), None);
    }

    #[test]
    fn summaries_follow_shells() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A")], &["D"]);
        let mut catalog = OccupationCatalog::new();
        catalog.insert("A", ["actor"]);
        catalog.insert("B", ["actor", "singer"]);
        catalog.insert("C", ["painter"]);
        let r = decompose(&g);
        let summaries = summarize(&r, &g, &catalog);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].coreness, 0);
        assert_eq!(summaries[0].cohort_size, 1);
        assert_eq!(
            summaries[0].attribution.buckets,
            vec![(attribution::OTHER_BUCKET.to_string(), 1)]
        );
        assert_eq!(summaries[1].cohort_size, 3);
        assert_eq!(summaries[1].attribution.dominant, vec!["actor"]);
    }
}
