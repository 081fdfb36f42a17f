// src/graph/occupations.rs
//! Occupation catalog: `person|occupation1|occupation2|...` per line.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::info;

use super::loader::{open_required, read_error, SEPARATOR};
use crate::error::{GraphError, Result};

/// Occupation tags per person, used only for coreness attribution.
#[derive(Debug, Clone, Default)]
pub struct OccupationCatalog {
    by_person: HashMap<String, Vec<String>>,
}

impl OccupationCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the catalog from `path`.
    ///
    /// # Errors
    /// Returns `MissingInput` if absent, `MalformedLine` for a line with an empty person.
    pub fn load(path: &Path) -> Result<Self> {
        info!("reading occupations from {}", path.display());
        let reader = open_required(path, "The occupation catalog is required for coreness.")?;
        Self::from_reader(reader, path)
    }

    /// # Errors
    /// See [`OccupationCatalog::load`].
    pub fn from_reader<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut catalog = Self::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| read_error(e, origin, i + 1))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let mut fields = trimmed.split(SEPARATOR);
            let person = fields.next().unwrap_or_default();
            if person.is_empty() {
                return Err(GraphError::MalformedLine {
                    path: origin.to_path_buf(),
                    line: i + 1,
                    content: line.clone(),
                });
            }
            catalog.insert(person, fields.filter(|f| !f.is_empty()));
        }
        Ok(catalog)
    }

    /// Sets the occupations of `person`, replacing any earlier entry.
    pub fn insert<I, S>(&mut self, person: &str, occupations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.by_person.insert(
            person.to_string(),
            occupations.into_iter().map(Into::into).collect(),
        );
    }

    /// Occupations of `person`; empty when unknown.
    #[must_use]
    pub fn occupations(&self, person: &str) -> &[String] {
        self.by_person
            .get(person)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_person.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_person.is_empty()
    }
}
