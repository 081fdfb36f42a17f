// src/cli/handlers.rs
//! One handler per analysis: load, compute, write, summarize.

use std::time::Instant;

use tracing::info;

use crate::analysis::{coreness, degree, pagerank, DegreeKind};
use crate::config::Config;
use crate::error::Result;
use crate::graph::{loader, OccupationCatalog, PeopleGraph};
use crate::preprocess::{self, PreprocessOutcome, PreprocessPaths};
use crate::reporting::writer::{self, CORENESS_FILE, CORENESS_OCCUPATIONS_FILE, PAGERANK_FILE};
use crate::types::{AnalysisSummary, GraphStats, RunReport};

/// Builds the people graph file unless it already exists.
///
/// # Errors
/// Returns error if an input dump is missing or writing fails.
pub fn handle_preprocess(config: &Config) -> Result<PreprocessOutcome> {
    preprocess::run(&PreprocessPaths {
        people: config.paths.people.clone(),
        links: config.paths.links.clone(),
        redirects: config.paths.redirects.clone(),
        output: config.paths.graph.clone(),
    })
}

/// Loads the graph and writes the three degree rankings.
///
/// # Errors
/// Returns error if the graph cannot be loaded or an output cannot be written.
pub fn handle_degree(config: &Config) -> Result<RunReport> {
    let graph = loader::load(&config.paths.graph)?;
    degree_on(&graph, config)
}

/// Loads the graph and writes the simulated `PageRank` scores.
///
/// # Errors
/// Returns error if the graph cannot be loaded, the walk parameters are invalid,
/// or the output cannot be written.
pub fn handle_pagerank(config: &Config) -> Result<RunReport> {
    config.pagerank.validate()?;
    let graph = loader::load(&config.paths.graph)?;
    pagerank_on(&graph, config)
}

/// Loads the graph and occupation catalog and writes coreness statistics.
///
/// # Errors
/// Returns error if an input cannot be loaded or an output cannot be written.
pub fn handle_coreness(config: &Config) -> Result<RunReport> {
    let catalog = OccupationCatalog::load(&config.paths.people)?;
    let graph = loader::load(&config.paths.graph)?;
    coreness_on(&graph, &catalog, config)
}

/// Runs all three analyses on one loaded graph.
///
/// The occupation catalog is only read once degree and `PageRank` are written,
/// since coreness is the only analysis that needs it.
///
/// # Errors
/// Returns the first failure; earlier analyses keep their outputs.
pub fn handle_all(config: &Config) -> Result<Vec<RunReport>> {
    config.pagerank.validate()?;
    let graph = loader::load(&config.paths.graph)?;
    let mut reports = vec![degree_on(&graph, config)?, pagerank_on(&graph, config)?];
    let catalog = OccupationCatalog::load(&config.paths.people)?;
    reports.push(coreness_on(&graph, &catalog, config)?);
    Ok(reports)
}

/// # Errors
/// Returns error if an output cannot be written.
pub fn degree_on(graph: &PeopleGraph, config: &Config) -> Result<RunReport> {
    let start = Instant::now();
    info!("calculating degrees");
    let report = degree::compute(graph);

    let mut outputs = Vec::new();
    for kind in DegreeKind::ALL {
        let path = config.out_file(writer::degree_file(kind));
        outputs.push(writer::write_file(&path, |w| {
            writer::degrees_to(w, graph, &report, kind)
        })?);
    }

    let max = |kind: DegreeKind| {
        report
            .records()
            .iter()
            .map(|r| r.get(kind))
            .max()
            .unwrap_or(0)
    };
    Ok(RunReport {
        graph: GraphStats::from(graph),
        summary: AnalysisSummary::Degree {
            max_degree: max(DegreeKind::Total),
            max_in_degree: max(DegreeKind::In),
            max_out_degree: max(DegreeKind::Out),
        },
        outputs,
        duration_ms: start.elapsed().as_millis(),
    })
}

/// # Errors
/// Returns error if the walk parameters are invalid or the output cannot be written.
pub fn pagerank_on(graph: &PeopleGraph, config: &Config) -> Result<RunReport> {
    let start = Instant::now();
    info!("calculating PageRank scores");
    let run = pagerank::simulate(graph, config.pagerank)?;
    info!(
        "    {} steps ({} of {} visited at least {} times)",
        run.total_steps,
        run.satisfied,
        graph.node_count(),
        config.pagerank.min_visits
    );

    let ranked = run.ranked();
    let path = config.out_file(PAGERANK_FILE);
    let written = writer::write_file(&path, |w| writer::pagerank_to(w, graph, &ranked))?;

    Ok(RunReport {
        graph: GraphStats::from(graph),
        summary: AnalysisSummary::PageRank {
            total_steps: run.total_steps,
            visited: ranked.len(),
            converged: run.converged,
            top: ranked.first().map(|&(_, _, n)| graph.name(n).to_string()),
        },
        outputs: vec![written],
        duration_ms: start.elapsed().as_millis(),
    })
}

/// # Errors
/// Returns error if an output cannot be written.
pub fn coreness_on(
    graph: &PeopleGraph,
    catalog: &OccupationCatalog,
    config: &Config,
) -> Result<RunReport> {
    let start = Instant::now();
    info!("calculating corenesses");
    let report = coreness::decompose(graph);
    let summaries = coreness::summarize(&report, graph, catalog);

    let outputs = vec![
        writer::write_file(&config.out_file(CORENESS_FILE), |w| {
            writer::coreness_to(w, graph, &report)
        })?,
        writer::write_file(&config.out_file(CORENESS_OCCUPATIONS_FILE), |w| {
            writer::shell_summaries_to(w, &summaries)
        })?,
    ];

    Ok(RunReport {
        graph: GraphStats::from(graph),
        summary: AnalysisSummary::Coreness {
            levels: report.shells().len(),
            max_coreness: report.max_coreness(),
        },
        outputs,
        duration_ms: start.elapsed().as_millis(),
    })
}
