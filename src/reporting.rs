//! Output of analysis results.
//!
//! `writer` produces the tab-separated statistics files that are the real
//! product of a run. `console` prints the short colored summary (or JSON) that
//! tells the user what was written.

pub mod console;
pub mod shared;
pub mod writer;

pub use console::{print_json, print_missing_input, print_report};
