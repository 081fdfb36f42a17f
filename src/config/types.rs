use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::PageRankConfig;

/// Input and output locations, relative to the working directory unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// The people graph (`source|target` per line).
    #[serde(default = "default_graph")]
    pub graph: PathBuf,
    /// People list with occupations (`person|occupation|...`).
    #[serde(default = "default_people")]
    pub people: PathBuf,
    /// Filtered link dump used by preprocessing (`source|target|target|...`).
    #[serde(default = "default_links")]
    pub links: PathBuf,
    /// Redirect titles used by preprocessing.
    #[serde(default = "default_redirects")]
    pub redirects: PathBuf,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            graph: default_graph(),
            people: default_people(),
            links: default_links(),
            redirects: default_redirects(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_graph() -> PathBuf { PathBuf::from("data/in/people-graph.txt") }
fn default_people() -> PathBuf { PathBuf::from("data/in/people.txt") }
fn default_links() -> PathBuf { PathBuf::from("data/in/links-filt.txt") }
fn default_redirects() -> PathBuf { PathBuf::from("data/in/redirects.txt") }
fn default_out_dir() -> PathBuf { PathBuf::from("data/out") }

/// On-disk shape of `biograph.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BiographToml {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub pagerank: PageRankConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub paths: PathsConfig,
    pub pagerank: PageRankConfig,
    /// Treat a missing input as a failing exit status.
    pub strict: bool,
    /// Print run summaries as JSON.
    pub json: bool,
}
