use crate::error::GraphError;
use crate::reporting::shared::{duration, pluralize};
use crate::types::{AnalysisSummary, RunReport};
use anyhow::Result;
use colored::Colorize;

/// Prints a human-readable summary of one finished analysis.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &RunReport) -> Result<()> {
    let duration = duration(report);
    let nodes = report.graph.nodes;
    let edges = report.graph.edges;
    let people = if nodes == 1 { "person" } else { "people" };

    println!(
        "{} {} on {nodes} {people}, {edges} {} ({duration:?}).",
        "OK".green().bold(),
        report.summary.name().cyan(),
        pluralize("link", edges),
    );
    print_details(&report.summary);
    for path in &report.outputs {
        println!("  {} {}", "-->".blue(), path.display());
    }
    Ok(())
}

fn print_details(summary: &AnalysisSummary) {
    match summary {
        AnalysisSummary::Degree {
            max_degree,
            max_in_degree,
            max_out_degree,
        } => {
            println!(
                "   {} max degree {max_degree}, max in-degree {max_in_degree}, max out-degree {max_out_degree}",
                "=".blue()
            );
        }
        AnalysisSummary::PageRank {
            total_steps,
            visited,
            converged,
            top,
        } => {
            println!(
                "   {} {total_steps} steps, {visited} visited",
                "=".blue()
            );
            if let Some(top) = top {
                println!("   {} most visited: {}", "=".blue(), top.yellow());
            }
            if !converged {
                println!(
                    "   {} {}",
                    "=".blue(),
                    "step cap reached before every person hit the visit threshold".yellow()
                );
            }
        }
        AnalysisSummary::Coreness {
            levels,
            max_coreness,
        } => {
            let max = max_coreness.map_or_else(|| "-".to_string(), |m| m.to_string());
            println!(
                "   {} {levels} {}, max coreness {max}",
                "=".blue(),
                pluralize("level", *levels)
            );
        }
    }
}

/// Prints the reports as a JSON array.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(reports: &[RunReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Reports a missing required input the way a skipped run is reported.
pub fn print_missing_input(err: &GraphError) {
    eprintln!("{} {err}", "missing input:".yellow().bold());
}
