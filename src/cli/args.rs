use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "biograph",
    version,
    about = "Degree, PageRank and coreness statistics for people graphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./biograph.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Log progress details
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Exit with a failure code when a required input is missing
    #[arg(long, global = true)]
    pub strict: bool,
    /// Print run summaries as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the people graph from the people, link and redirect dumps
    Preprocess {
        #[arg(long, value_name = "FILE")]
        people: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        links: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        redirects: Option<PathBuf>,
        /// Graph file to write
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Total, in- and out-degree per person
    Degree {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Approximate PageRank by random-walk simulation
    Pagerank {
        #[command(flatten)]
        graph: GraphArgs,
        #[command(flatten)]
        walk: WalkArgs,
    },
    /// In-degree coreness with occupation breakdown per level
    Coreness {
        #[command(flatten)]
        graph: GraphArgs,
        /// Occupation catalog (`person|occupation|...`)
        #[arg(long, value_name = "FILE")]
        people: Option<PathBuf>,
    },
    /// Degree, PageRank and coreness on one loaded graph
    All {
        #[command(flatten)]
        graph: GraphArgs,
        #[command(flatten)]
        walk: WalkArgs,
        #[arg(long, value_name = "FILE")]
        people: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// People graph (`source|target` per line)
    #[arg(long, value_name = "FILE")]
    pub graph: Option<PathBuf>,
    /// Directory for the statistics files
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    #[arg(long)]
    pub seed: Option<u64>,
    /// Teleport probability per step
    #[arg(long)]
    pub teleport: Option<f64>,
    /// Visits every person needs before the walk stops
    #[arg(long)]
    pub min_visits: Option<u64>,
    /// Stop after this many steps even if not converged
    #[arg(long)]
    pub max_steps: Option<u64>,
}

impl GraphArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(graph) = &self.graph {
            config.paths.graph.clone_from(graph);
        }
        if let Some(dir) = &self.out_dir {
            config.paths.out_dir.clone_from(dir);
        }
    }
}

impl WalkArgs {
    pub fn apply(&self, config: &mut Config) {
        let walk = &mut config.pagerank;
        if let Some(seed) = self.seed {
            walk.seed = seed;
        }
        if let Some(p) = self.teleport {
            walk.teleport_probability = p;
        }
        if let Some(m) = self.min_visits {
            walk.min_visits = m;
        }
        if self.max_steps.is_some() {
            walk.max_steps = self.max_steps;
        }
    }
}

impl Commands {
    /// Folds command-line overrides into `config`.
    pub fn apply(&self, config: &mut Config) {
        match self {
            Self::Preprocess {
                people,
                links,
                redirects,
                output,
            } => {
                let paths = &mut config.paths;
                for (slot, value) in [
                    (&mut paths.people, people),
                    (&mut paths.links, links),
                    (&mut paths.redirects, redirects),
                    (&mut paths.graph, output),
                ] {
                    if let Some(v) = value {
                        slot.clone_from(v);
                    }
                }
            }
            Self::Degree { graph } => graph.apply(config),
            Self::Pagerank { graph, walk } => {
                graph.apply(config);
                walk.apply(config);
            }
            Self::Coreness { graph, people } => {
                graph.apply(config);
                if let Some(p) = people {
                    config.paths.people.clone_from(p);
                }
            }
            Self::All { graph, walk, people } => {
                graph.apply(config);
                walk.apply(config);
                if let Some(p) = people {
                    config.paths.people.clone_from(p);
                }
            }
            Self::Config => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "biograph",
            "pagerank",
            "--graph",
            "g.txt",
            "--seed",
            "9",
            "--teleport",
            "0.2",
            "--max-steps",
            "100",
        ]);
        let mut config = Config::new();
        cli.command.unwrap().apply(&mut config);
        assert_eq!(config.paths.graph, Path::new("g.txt"));
        assert_eq!(config.pagerank.seed, 9);
        assert!((config.pagerank.teleport_probability - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.pagerank.min_visits, 500);
        assert_eq!(config.pagerank.max_steps, Some(100));
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["biograph", "degree", "--strict", "--json"]);
        assert!(cli.strict);
        assert!(cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn preprocess_output_sets_graph_path() {
        let cli = Cli::parse_from(["biograph", "preprocess", "--output", "out/g.txt"]);
        let mut config = Config::new();
        cli.command.unwrap().apply(&mut config);
        assert_eq!(config.paths.graph, Path::new("out/g.txt"));
        assert_eq!(config.paths.people, Path::new("data/in/people.txt"));
    }
}
