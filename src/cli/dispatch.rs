//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Cli, Commands},
    handlers::{handle_all, handle_coreness, handle_degree, handle_pagerank, handle_preprocess},
};
use crate::config::{io, BiographToml, Config};
use crate::error::GraphError;
use crate::exit::BiographExit;
use crate::preprocess::PreprocessOutcome;
use crate::reporting;
use crate::types::RunReport;
use anyhow::Result;
use colored::Colorize;

/// Resolves the effective config: file (or defaults), then CLI overrides.
///
/// # Errors
/// Returns error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli, command: &Commands) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.strict = cli.strict;
    config.json = cli.json;
    command.apply(&mut config);
    Ok(config)
}

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the config cannot be loaded or an unexpected I/O failure occurs.
pub fn execute(cli: &Cli, command: &Commands) -> Result<BiographExit> {
    let config = resolve_config(cli, command)?;

    match command {
        Commands::Preprocess { .. } => match handle_preprocess(&config) {
            Ok(outcome) => report_preprocess(&config, &outcome),
            Err(e) => failure(&config, e),
        },
        Commands::Degree { .. } => finish(&config, handle_degree(&config).map(|r| vec![r])),
        Commands::Pagerank { .. } => finish(&config, handle_pagerank(&config).map(|r| vec![r])),
        Commands::Coreness { .. } => finish(&config, handle_coreness(&config).map(|r| vec![r])),
        Commands::All { .. } => finish(&config, handle_all(&config)),
        Commands::Config => {
            let effective = BiographToml {
                paths: config.paths.clone(),
                pagerank: config.pagerank,
            };
            print!("{}", io::to_toml(&effective)?);
            Ok(BiographExit::Success)
        }
    }
}

fn finish(
    config: &Config,
    result: crate::error::Result<Vec<RunReport>>,
) -> Result<BiographExit> {
    let reports = match result {
        Ok(reports) => reports,
        Err(e) => return failure(config, e),
    };
    if config.json {
        reporting::print_json(&reports)?;
    } else {
        for report in &reports {
            reporting::print_report(report)?;
        }
    }
    Ok(BiographExit::Success)
}

fn report_preprocess(config: &Config, outcome: &PreprocessOutcome) -> Result<BiographExit> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(BiographExit::Success);
    }
    match outcome {
        PreprocessOutcome::Skipped { output } => println!(
            "{} file {} already exists, skipping.",
            "~".yellow().bold(),
            output.display()
        ),
        PreprocessOutcome::Written {
            output,
            people,
            edges,
            sinks,
        } => println!(
            "{} wrote {} ({people} people, {edges} links, {sinks} without outgoing links).",
            "OK".green().bold(),
            output.display()
        ),
    }
    Ok(BiographExit::Success)
}

/// Maps a library error to an exit code; I/O failures propagate as errors.
fn failure(config: &Config, err: GraphError) -> Result<BiographExit> {
    match err {
        GraphError::MissingInput { .. } => {
            reporting::print_missing_input(&err);
            if config.strict {
                Ok(BiographExit::MissingInput)
            } else {
                Ok(BiographExit::Success)
            }
        }
        GraphError::MalformedLine { .. }
        | GraphError::UnknownTarget { .. }
        | GraphError::DuplicateEdge { .. }
        | GraphError::InvalidParameter(_) => {
            eprintln!("{} {err}", "invalid input:".red().bold());
            Ok(BiographExit::InvalidInput)
        }
        GraphError::Io { .. } => Err(err.into()),
    }
}
