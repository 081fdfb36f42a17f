// src/preprocess.rs
//! Builds the people graph file from the people list, link dump and redirects.
//!
//! Output is one `source|target` line per distinct link between two people,
//! followed by a `person|` line for every person without outgoing links, so the
//! full people set can be recovered from the edge list alone.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{GraphError, Result};
use crate::graph::loader::{open_required, SEPARATOR};

const PROGRESS_EVERY: usize = 10_000;
const INPUT_HINT: &str = "Place the people, link and redirect dumps under data/in first.";

#[derive(Debug, Clone)]
pub struct PreprocessPaths {
    pub people: PathBuf,
    pub links: PathBuf,
    pub redirects: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreprocessOutcome {
    /// The output already existed and was left untouched.
    Skipped { output: PathBuf },
    Written {
        output: PathBuf,
        people: usize,
        edges: usize,
        sinks: usize,
    },
}

/// Writes the people graph unless it already exists.
///
/// # Errors
/// Returns `MissingInput` for an absent input dump and `Io` on read/write failure.
pub fn run(paths: &PreprocessPaths) -> Result<PreprocessOutcome> {
    if paths.output.is_file() {
        info!("file {} already exists, skipping.", paths.output.display());
        return Ok(PreprocessOutcome::Skipped {
            output: paths.output.clone(),
        });
    }

    info!("reading list of redirects");
    let redirects: HashSet<String> = first_fields(&paths.redirects)?.into_iter().collect();

    info!("reading list of people");
    let mut people = Vec::new();
    let mut seen = HashSet::new();
    for person in first_fields(&paths.people)? {
        if !redirects.contains(&person) && seen.insert(person.clone()) {
            people.push(person);
        }
    }

    info!("writing list of links between people");
    let links = open_required(&paths.links, INPUT_HINT)?;
    if let Some(parent) = paths.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| GraphError::io(e, parent))?;
    }
    let file = File::create(&paths.output).map_err(|e| GraphError::io(e, &paths.output))?;
    let mut out = BufWriter::new(file);

    let (edges, with_links) = write_links(links, &seen, &mut out, paths)?;

    let mut sinks = 0;
    for person in people.iter().filter(|p| !with_links.contains(p.as_str())) {
        writeln!(out, "{person}{SEPARATOR}").map_err(|e| GraphError::io(e, &paths.output))?;
        sinks += 1;
    }
    out.flush().map_err(|e| GraphError::io(e, &paths.output))?;

    Ok(PreprocessOutcome::Written {
        output: paths.output.clone(),
        people: people.len(),
        edges,
        sinks,
    })
}

fn write_links<R: BufRead, W: Write>(
    links: R,
    people: &HashSet<String>,
    out: &mut W,
    paths: &PreprocessPaths,
) -> Result<(usize, HashSet<String>)> {
    let mut written: HashSet<(String, String)> = HashSet::new();
    let mut with_links: HashSet<String> = HashSet::new();

    for (i, line) in links.lines().enumerate() {
        let line = line.map_err(|e| GraphError::io(e, &paths.links))?;
        let mut fields = line.trim().split(SEPARATOR);
        let Some(source) = fields.next().filter(|s| people.contains(*s)) else {
            continue;
        };
        for target in fields.filter(|t| people.contains(*t)) {
            let pair = (source.to_string(), target.to_string());
            if written.contains(&pair) {
                continue;
            }
            writeln!(out, "{source}{SEPARATOR}{target}")
                .map_err(|e| GraphError::io(e, &paths.output))?;
            with_links.insert(pair.0.clone());
            written.insert(pair);
        }
        if (i + 1) % PROGRESS_EVERY == 0 {
            debug!("    {} {source}", i + 1);
        }
    }

    Ok((written.len(), with_links))
}

/// First `|`-separated field of every non-empty line.
fn first_fields(path: &Path) -> Result<Vec<String>> {
    let reader = open_required(path, INPUT_HINT)?;
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| GraphError::io(e, path))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(first) = trimmed.split(SEPARATOR).next().filter(|f| !f.is_empty()) {
            out.push(first.to_string());
        }
    }
    Ok(out)
}
