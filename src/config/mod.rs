//! Configuration for condgraph.
//!
//! Read from `.condgraph/config.yaml` in the working directory, or from an
//! explicit path. Every section and field is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Default project config location, relative to the working directory.
pub const CONFIG_PATH: &str = ".condgraph/config.yaml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub diagram: DiagramConfig,
}

impl Config {
    /// Load `.condgraph/config.yaml` if present, defaults otherwise.
    pub fn load() -> Result<Self> {
        let path = Path::new(CONFIG_PATH);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(content).context("Failed to parse config YAML")?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.analysis.validate()?;
        self.report.validate()?;
        self.diagram.validate()
    }
}
