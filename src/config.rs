//! Service configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Jurisdiction;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    /// Directory holding `<CODE>.json` boundary datasets
    pub data_dir: PathBuf,
    /// Jurisdictions with local division data
    pub supported: Vec<Jurisdiction>,
    pub listen: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            supported: vec![
                Jurisdiction::Nsw,
                Jurisdiction::Qld,
                Jurisdiction::Tas,
                Jurisdiction::Vic,
            ],
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}
