//! # biograph
//!
//! Structural statistics over a directed graph of people linked by references:
//! - degree counting (total, in, out)
//! - approximate `PageRank` by random-walk simulation
//! - in-degree k-core peeling with occupation attribution per shell
//!
//! All three analyses read the same immutable [`graph::PeopleGraph`] and are
//! deterministic for a fixed input (and seed, for `PageRank`).

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod preprocess;
pub mod reporting;
pub mod types;

pub use error::{GraphError, Result};
pub use graph::{NodeId, PeopleGraph};
