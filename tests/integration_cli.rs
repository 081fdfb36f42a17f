// tests/integration_cli.rs
//! Exit codes and end-to-end runs through the command dispatcher.

use anyhow::Result;
use biograph_core::cli::{dispatch, Cli};
use biograph_core::exit::BiographExit;
use clap::Parser;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<BiographExit> {
    let cli = Cli::parse_from(std::iter::once("biograph").chain(args.iter().copied()));
    let command = cli.command.clone().expect("subcommand");
    dispatch::execute(&cli, &command)
}

fn s(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn missing_graph_exits_cleanly_by_default() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("absent.txt");
    let out = dir.path().join("out");
    let exit = run(&["degree", "--graph", s(&graph), "--out-dir", s(&out)])?;
    assert_eq!(exit, BiographExit::Success);
    assert!(!out.exists());
    Ok(())
}

#[test]
fn missing_graph_fails_when_strict() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("absent.txt");
    let exit = run(&["degree", "--strict", "--graph", s(&graph)])?;
    assert_eq!(exit, BiographExit::MissingInput);
    assert_eq!(exit.code(), 3);
    Ok(())
}

#[test]
fn malformed_graph_is_invalid_input() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, "A|B\nnot an edge\n")?;
    let out = dir.path().join("out");
    let exit = run(&["degree", "--graph", s(&graph), "--out-dir", s(&out)])?;
    assert_eq!(exit, BiographExit::InvalidInput);
    Ok(())
}

#[test]
fn duplicate_edge_is_invalid_input() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, "A|B\nB|A\nA|B\n")?;
    let exit = run(&["degree", "--graph", s(&graph), "--out-dir", s(dir.path())])?;
    assert_eq!(exit, BiographExit::InvalidInput);
    Ok(())
}

#[test]
fn bad_teleport_is_invalid_input() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, "A|\n")?;
    let exit = run(&["pagerank", "--graph", s(&graph), "--teleport", "1.5"])?;
    assert_eq!(exit, BiographExit::InvalidInput);
    Ok(())
}

#[test]
fn preprocess_then_all() -> Result<()> {
    let dir = TempDir::new()?;
    let input = dir.path().join("in");
    fs::create_dir_all(&input)?;
    fs::write(input.join("people.txt"), "Ada|mathematician\nBob|writer\nCy|painter\nOld|\n")?;
    fs::write(input.join("redirects.txt"), "Old|Ada\n")?;
    fs::write(input.join("links.txt"), "Ada|Bob|Paris\nBob|Ada|Old\nBob|Ada\nZed|Ada\n")?;
    let graph = dir.path().join("people-graph.txt");
    let out = dir.path().join("out");

    let exit = run(&[
        "preprocess",
        "--people",
        s(&input.join("people.txt")),
        "--links",
        s(&input.join("links.txt")),
        "--redirects",
        s(&input.join("redirects.txt")),
        "--output",
        s(&graph),
    ])?;
    assert_eq!(exit, BiographExit::Success);
    assert_eq!(fs::read_to_string(&graph)?, "Ada|Bob\nBob|Ada\nCy|\n");

    let exit = run(&[
        "all",
        "--json",
        "--graph",
        s(&graph),
        "--people",
        s(&input.join("people.txt")),
        "--out-dir",
        s(&out),
        "--min-visits",
        "20",
    ])?;
    assert_eq!(exit, BiographExit::Success);
    for file in [
        "degree.txt",
        "in-degree.txt",
        "out-degree.txt",
        "pagerank.txt",
        "coreness.txt",
        "coreness-occupations.txt",
    ] {
        assert!(out.join(file).is_file(), "{file} missing");
    }
    assert_eq!(
        fs::read_to_string(out.join("coreness.txt"))?,
        "1\tAda\n1\tBob\n0\tCy\n"
    );
    Ok(())
}

#[test]
fn explicit_config_file_is_used() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, "A|B\nB|A\n")?;
    let out = dir.path().join("stats");
    let config = dir.path().join("biograph.toml");
    fs::write(
        &config,
        format!(
            "[paths]\ngraph = {:?}\nout_dir = {:?}\n",
            s(&graph),
            s(&out)
        ),
    )?;

    let exit = run(&["degree", "--config", s(&config)])?;
    assert_eq!(exit, BiographExit::Success);
    assert_eq!(fs::read_to_string(out.join("degree.txt"))?, "2\tA\n2\tB\n");
    Ok(())
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = run(&["degree", "--config", s(&dir.path().join("nope.toml"))]);
    assert!(result.is_err());
}

#[test]
fn all_writes_degree_and_pagerank_without_catalog() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, "A|B\nB|A\nC|A\n")?;
    let out = dir.path().join("out");
    let exit = run(&[
        "all",
        "--graph",
        s(&graph),
        "--people",
        s(&dir.path().join("absent.txt")),
        "--out-dir",
        s(&out),
        "--min-visits",
        "5",
    ])?;
    assert_eq!(exit, BiographExit::Success);
    assert!(out.join("degree.txt").is_file());
    assert!(out.join("pagerank.txt").is_file());
    assert!(!out.join("coreness.txt").exists());
    Ok(())
}

#[test]
fn bad_walk_settings_do_not_block_degree() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, "A|B\nB|A\n")?;
    let out = dir.path().join("out");
    let config = dir.path().join("biograph.toml");
    fs::write(&config, "[pagerank]\nteleport_probability = 2.0\n")?;

    let exit = run(&[
        "degree",
        "--config",
        s(&config),
        "--graph",
        s(&graph),
        "--out-dir",
        s(&out),
    ])?;
    assert_eq!(exit, BiographExit::Success);
    assert!(out.join("degree.txt").is_file());

    let exit = run(&["pagerank", "--config", s(&config), "--graph", s(&graph)])?;
    assert_eq!(exit, BiographExit::InvalidInput);
    Ok(())
}

#[test]
fn undecodable_graph_is_invalid_input() -> Result<()> {
    let dir = TempDir::new()?;
    let graph = dir.path().join("g.txt");
    fs::write(&graph, b"A|B\nB|\xff\xfe\n")?;
    let exit = run(&["degree", "--graph", s(&graph), "--out-dir", s(dir.path())])?;
    assert_eq!(exit, BiographExit::InvalidInput);
    Ok(())
}
