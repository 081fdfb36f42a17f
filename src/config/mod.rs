// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{BiographToml, Config, PathsConfig};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "biograph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from `explicit`, or from `biograph.toml` in the working
    /// directory when present, or from defaults.
    ///
    /// # Errors
    /// Returns error if an explicitly named file is missing or any file holds invalid TOML.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::new();
        match explicit {
            Some(path) => config.apply(io::read_toml(path)?),
            None => {
                if let Some(toml) = io::read_toml_if_present(Path::new(CONFIG_FILE))? {
                    config.apply(toml);
                }
            }
        }
        Ok(config)
    }

    /// Parses TOML text over the defaults.
    ///
    /// # Errors
    /// Returns error if the text is not valid `biograph.toml`.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed = io::parse_toml(content)?;
        self.apply(parsed);
        Ok(())
    }

    fn apply(&mut self, toml: BiographToml) {
        self.paths = toml.paths;
        self.pagerank = toml.pagerank;
    }

    /// Location of an output file inside the configured output directory.
    #[must_use]
    pub fn out_file(&self, name: &str) -> PathBuf {
        self.paths.out_dir.join(name)
    }
}
