// src/graph/loader.rs
//! Edge-list parsing: `source|target` per line, empty target marks a sink.

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, info};

use super::{GraphBuilder, PeopleGraph};
use crate::error::{GraphError, Result};

pub const SEPARATOR: char = '|';
const PROGRESS_EVERY: usize = 10_000;
const PREPROCESS_HINT: &str = "Run `biograph preprocess` first.";

/// Opens a required input file, mapping absence to [`GraphError::MissingInput`].
///
/// # Errors
/// Returns `MissingInput` if the file does not exist, `Io` if it cannot be opened.
pub fn open_required(path: &Path, hint: &'static str) -> Result<BufReader<File>> {
    if !path.is_file() {
        return Err(GraphError::MissingInput {
            path: path.to_path_buf(),
            hint,
        });
    }
    let file = File::open(path).map_err(|e| GraphError::io(e, path))?;
    Ok(BufReader::new(file))
}

/// Loads the people graph from `path`.
///
/// # Errors
/// Returns `MissingInput` if the file is absent, `MalformedLine` on a bad line,
/// and the builder's validation errors for unknown targets or duplicate edges.
pub fn load(path: &Path) -> Result<PeopleGraph> {
    info!("reading graph from {}", path.display());
    let reader = open_required(path, PREPROCESS_HINT)?;
    from_reader(reader, path)
}

/// Parses an edge list from any buffered reader; `origin` is used in errors.
///
/// # Errors
/// See [`load`].
pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<PeopleGraph> {
    let mut builder = GraphBuilder::new();
    let mut read = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| read_error(e, origin, i + 1))?;
        match parse_line(&line, i + 1, origin)? {
            (source, Some(target)) => builder.add_edge(source, target),
            (source, None) => {
                builder.add_sink(source);
            }
        }
        read = i + 1;
        if read % PROGRESS_EVERY == 0 {
            debug!("    {read} lines");
        }
    }

    debug!("read {read} lines, {} edges", builder.edge_count());
    builder.build()
}

/// Maps a failed line read. Bytes that are not UTF-8 make the line malformed;
/// anything else is an I/O failure.
pub(crate) fn read_error(err: io::Error, origin: &Path, line_no: usize) -> GraphError {
    if err.kind() == ErrorKind::InvalidData {
        GraphError::MalformedLine {
            path: origin.to_path_buf(),
            line: line_no,
            content: "<invalid UTF-8>".to_string(),
        }
    } else {
        GraphError::io(err, origin)
    }
}

/// Splits one line into `(source, target)`; an empty target yields `None`.
///
/// # Errors
/// Returns `MalformedLine` unless the trimmed line has exactly two `|`-separated
/// fields with a non-empty source.
pub fn parse_line<'a>(
    line: &'a str,
    line_no: usize,
    origin: &Path,
) -> Result<(&'a str, Option<&'a str>)> {
    let malformed = || GraphError::MalformedLine {
        path: origin.to_path_buf(),
        line: line_no,
        content: line.to_string(),
    };

    let trimmed = line.trim();
    let (source, target) = trimmed.split_once(SEPARATOR).ok_or_else(malformed)?;
    if source.is_empty() || target.contains(SEPARATOR) {
        return Err(malformed());
    }
    Ok((source, (!target.is_empty()).then_some(target)))
}
