// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("file {} doesn't exist. {hint}", path.display())]
    MissingInput { path: PathBuf, hint: &'static str },

    #[error("malformed line {line} in {}: {content:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("edge target {target:?} never appears as a source")]
    UnknownTarget { target: String },

    #[error("duplicate edge {source_node:?} -> {target:?}")]
    DuplicateEdge { source_node: String, target: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    /// Wraps an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True when the run failed because a required input file is absent.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}
