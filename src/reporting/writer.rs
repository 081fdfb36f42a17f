// src/reporting/writer.rs
//! Tab-separated statistics files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::{CorenessReport, DegreeKind, DegreeReport, ShellSummary};
use crate::error::{GraphError, Result};
use crate::graph::{NodeId, PeopleGraph};

pub const DEGREE_FILE: &str = "degree.txt";
pub const IN_DEGREE_FILE: &str = "in-degree.txt";
pub const OUT_DEGREE_FILE: &str = "out-degree.txt";
pub const PAGERANK_FILE: &str = "pagerank.txt";
pub const CORENESS_FILE: &str = "coreness.txt";
pub const CORENESS_OCCUPATIONS_FILE: &str = "coreness-occupations.txt";

/// Output file name for one degree ranking.
#[must_use]
pub fn degree_file(kind: DegreeKind) -> &'static str {
    match kind {
        DegreeKind::Total => DEGREE_FILE,
        DegreeKind::In => IN_DEGREE_FILE,
        DegreeKind::Out => OUT_DEGREE_FILE,
    }
}

/// Writes `degree\tperson` lines for one ranking.
///
/// # Errors
/// Returns error if writing fails.
pub fn degrees_to<W: Write>(
    out: &mut W,
    graph: &PeopleGraph,
    report: &DegreeReport,
    kind: DegreeKind,
) -> std::io::Result<()> {
    for (degree, node) in report.ranked(kind) {
        writeln!(out, "{degree}\t{}", graph.name(node))?;
    }
    Ok(())
}

/// Writes `visits\tscore person` lines from [`PageRankRun::ranked`](crate::analysis::PageRankRun::ranked); the score
/// has 12 fractional digits.
///
/// # Errors
/// Returns error if writing fails.
pub fn pagerank_to<W: Write>(
    out: &mut W,
    graph: &PeopleGraph,
    ranked: &[(u64, f64, NodeId)],
) -> std::io::Result<()> {
    for &(visits, score, node) in ranked {
        writeln!(out, "{visits}\t{score:.12} {}", graph.name(node))?;
    }
    Ok(())
}

/// Writes `coreness\tperson` lines, highest coreness first.
///
/// # Errors
/// Returns error if writing fails.
pub fn coreness_to<W: Write>(
    out: &mut W,
    graph: &PeopleGraph,
    report: &CorenessReport,
) -> std::io::Result<()> {
    for (coreness, node) in report.ranked() {
        writeln!(out, "{coreness}\t{}", graph.name(node))?;
    }
    Ok(())
}

/// Writes `coreness\tcohort_size(\ttag\tcount)*` per level, ascending.
///
/// # Errors
/// Returns error if writing fails.
pub fn shell_summaries_to<W: Write>(
    out: &mut W,
    summaries: &[ShellSummary],
) -> std::io::Result<()> {
    for s in summaries {
        write!(out, "{}\t{}", s.coreness, s.cohort_size)?;
        for (tag, count) in &s.attribution.buckets {
            write!(out, "\t{tag}\t{count}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Creates `path` (and its directory) and hands a buffered writer to `body`.
///
/// # Errors
/// Returns `Io` tagged with `path` if creating or writing fails.
pub fn write_file<F>(path: &Path, body: F) -> Result<PathBuf>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| GraphError::io(e, dir))?;
    }
    let file = File::create(path).map_err(|e| GraphError::io(e, path))?;
    let mut out = BufWriter::new(file);
    body(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| GraphError::io(e, path))?;
    info!("wrote {}", path.display());
    Ok(path.to_path_buf())
}
