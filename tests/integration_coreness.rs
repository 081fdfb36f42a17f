// tests/integration_coreness.rs
//! Coreness against the definition, plus the files written per run.

use anyhow::Result;
use biograph_core::analysis::coreness;
use biograph_core::cli::handlers::handle_coreness;
use biograph_core::config::Config;
use biograph_core::graph::{GraphBuilder, PeopleGraph};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use tempfile::TempDir;

/// Coreness straight from the definition: the largest k whose k-core holds the node.
fn naive_coreness(graph: &PeopleGraph) -> Vec<usize> {
    let n = graph.node_count();
    let mut result = vec![0; n];
    for k in 1..=graph.edge_count() {
        let mut present = vec![true; n];
        loop {
            let mut in_deg = vec![0usize; n];
            for (s, t) in graph.edges() {
                if present[s] && present[t] {
                    in_deg[t] += 1;
                }
            }
            let drop: Vec<usize> = (0..n).filter(|&v| present[v] && in_deg[v] < k).collect();
            if drop.is_empty() {
                break;
            }
            for v in drop {
                present[v] = false;
            }
        }
        if !present.iter().any(|&p| p) {
            break;
        }
        for v in (0..n).filter(|&v| present[v]) {
            result[v] = k;
        }
    }
    result
}

fn build(n: usize, edges: &BTreeSet<(usize, usize)>) -> PeopleGraph {
    let mut b = GraphBuilder::new();
    for i in 0..n {
        b.add_sink(&format!("n{i}"));
    }
    for &(s, t) in edges {
        b.add_edge(&format!("n{s}"), &format!("n{t}"));
    }
    b.build().expect("valid random graph")
}

fn random_graph() -> impl Strategy<Value = (usize, BTreeSet<(usize, usize)>)> {
    (1usize..14).prop_flat_map(|n| {
        let edges = prop::collection::btree_set((0..n, 0..n), 0..(n * n).min(40));
        (Just(n), edges)
    })
}

proptest! {
    #[test]
    fn matches_definition((n, edges) in random_graph()) {
        let graph = build(n, &edges);
        let report = coreness::decompose(&graph);
        let expected = naive_coreness(&graph);
        prop_assert_eq!(report.values(), expected.as_slice());
    }

    #[test]
    fn shells_partition_the_nodes((n, edges) in random_graph()) {
        let graph = build(n, &edges);
        let report = coreness::decompose(&graph);

        let mut seen = vec![false; n];
        for (i, shell) in report.shells().iter().enumerate() {
            prop_assert_eq!(shell.k, i + 1);
            for &m in &shell.members {
                prop_assert!(!seen[m]);
                seen[m] = true;
                prop_assert_eq!(report.coreness(m), shell.coreness());
            }
        }
        prop_assert!(seen.iter().all(|&s| s));
        prop_assert!(report.ranked().windows(2).all(|w| w[0].0 >= w[1].0));
    }
}

fn setup(graph: &str, people: &str) -> Result<(TempDir, Config)> {
    let dir = TempDir::new()?;
    let graph_path = dir.path().join("people-graph.txt");
    let people_path = dir.path().join("people.txt");
    fs::write(&graph_path, graph)?;
    fs::write(&people_path, people)?;
    let mut config = Config::new();
    config.paths.graph = graph_path;
    config.paths.people = people_path;
    config.paths.out_dir = dir.path().join("out");
    Ok((dir, config))
}

#[test]
fn example_graph_files() -> Result<()> {
    let (_dir, config) = setup(
        "A|B\nB|C\nC|A\nD|\n",
        "A|politician\nB|politician|writer\nC|painter\nD|writer\n",
    )?;
    let report = handle_coreness(&config)?;
    assert_eq!(report.outputs.len(), 2);

    let text = fs::read_to_string(config.out_file("coreness.txt"))?;
    let values: HashMap<&str, &str> = text
        .lines()
        .map(|l| {
            let (c, p) = l.split_once('\t').expect("tab-separated");
            (p, c)
        })
        .collect();
    assert_eq!(values.len(), 4);
    assert_eq!(values["D"], "0");
    for p in ["A", "B", "C"] {
        assert_eq!(values[p], "1");
    }
    assert_eq!(text.lines().last(), Some("0\tD"));

    let summary = fs::read_to_string(config.out_file("coreness-occupations.txt"))?;
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "0\t1\twriter\t1");
    assert_eq!(lines[1], "1\t3\tpolitician\t2\tother/unknown\t1");
    assert_eq!(lines.len(), 2);
    Ok(())
}

#[test]
fn unknown_people_fall_into_other_bucket() -> Result<()> {
    let (_dir, config) = setup("A|B\nB|A\nC|A\n", "")?;
    handle_coreness(&config)?;
    let summary = fs::read_to_string(config.out_file("coreness-occupations.txt"))?;
    assert_eq!(summary, "0\t1\tother/unknown\t1\n1\t2\tother/unknown\t2\n");
    Ok(())
}

#[test]
fn missing_catalog_is_missing_input() -> Result<()> {
    let (dir, mut config) = setup("A|\n", "")?;
    config.paths.people = dir.path().join("absent.txt");
    let err = handle_coreness(&config).unwrap_err();
    assert!(err.is_missing_input());
    Ok(())
}

#[test]
fn unknown_target_is_rejected() -> Result<()> {
    let (_dir, config) = setup("A|B\n", "")?;
    let err = handle_coreness(&config).unwrap_err();
    assert!(err.to_string().contains("\"B\""), "{err}");
    Ok(())
}
