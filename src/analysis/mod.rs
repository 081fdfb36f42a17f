// src/analysis/mod.rs
//! The three independent analyses over a loaded [`PeopleGraph`](crate::graph::PeopleGraph).

pub mod attribution;
pub mod coreness;
pub mod degree;
pub mod pagerank;

pub use coreness::{CorenessReport, Shell, ShellSummary};
pub use degree::{DegreeKind, DegreeRecord, DegreeReport};
pub use pagerank::{PageRankConfig, PageRankRun, Simulator};
