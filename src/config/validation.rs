//! Range checks for loaded configuration.

use anyhow::Result;

use super::defaults::{AnalysisConfig, DiagramConfig, ReportConfig};

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if !(10..=20).contains(&self.max_chain_depth) {
            anyhow::bail!(
                "analysis.max_chain_depth must be between 10 and 20, got {}",
                self.max_chain_depth
            );
        }
        if self.max_condition_depth == 0 {
            anyhow::bail!("analysis.max_condition_depth must be greater than 0");
        }
        if self.max_complexity <= 0.0 {
            anyhow::bail!(
                "analysis.max_complexity must be positive, got {}",
                self.max_complexity
            );
        }
        Ok(())
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.isolated_ratio_threshold) {
            anyhow::bail!(
                "report.isolated_ratio_threshold must be between 0.0 and 1.0, got {}",
                self.isolated_ratio_threshold
            );
        }
        if self.complexity_threshold <= 0.0 {
            anyhow::bail!(
                "report.complexity_threshold must be positive, got {}",
                self.complexity_threshold
            );
        }
        Ok(())
    }
}

impl DiagramConfig {
    pub fn validate(&self) -> Result<()> {
        if self.title_max_len < 4 {
            anyhow::bail!(
                "diagram.title_max_len must be at least 4, got {}",
                self.title_max_len
            );
        }
        Ok(())
    }
}
