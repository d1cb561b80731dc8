//! Default values and configuration structs with default implementations.

use serde::{Deserialize, Serialize};

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

// =========================================================================
// DEFAULT VALUE FUNCTIONS
// =========================================================================

default_fn!(default_max_chain_depth, usize, 15);
default_fn!(default_max_condition_depth, usize, 32);
default_fn!(default_max_sub_conditions, usize, 10);
default_fn!(default_max_nesting_level, usize, 5);
default_fn!(default_max_complexity, f64, 50.0);
default_fn!(default_complexity_threshold, f64, 20.0);
default_fn!(default_nesting_threshold, usize, 3);
default_fn!(default_isolated_ratio_threshold, f64, 0.3);
default_fn!(default_top_complex_count, usize, 5);
default_fn!(default_title_max_len, usize, 30);

// =========================================================================
// CONFIG STRUCTS WITH DEFAULTS
// =========================================================================

/// Limits applied while analysing and validating conditions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Depth cap when expanding transitive dependencies (default: 15)
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,
    /// Maximum condition tree depth walked by structural validation (default: 32)
    #[serde(default = "default_max_condition_depth")]
    pub max_condition_depth: usize,
    /// Sub-conditions per combinator before a maintainability warning (default: 10)
    #[serde(default = "default_max_sub_conditions")]
    pub max_sub_conditions: usize,
    /// Nesting level before a warning (default: 5)
    #[serde(default = "default_max_nesting_level")]
    pub max_nesting_level: usize,
    /// Complexity score before a warning (default: 50)
    #[serde(default = "default_max_complexity")]
    pub max_complexity: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_chain_depth: default_max_chain_depth(),
            max_condition_depth: default_max_condition_depth(),
            max_sub_conditions: default_max_sub_conditions(),
            max_nesting_level: default_max_nesting_level(),
            max_complexity: default_max_complexity(),
        }
    }
}

/// Thresholds that drive report recommendations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Max complexity above which simplification is recommended (default: 20)
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: f64,
    /// Max nesting above which flattening is recommended (default: 3)
    #[serde(default = "default_nesting_threshold")]
    pub nesting_threshold: usize,
    /// Share of isolated questions above which relations are suggested (default: 0.3)
    #[serde(default = "default_isolated_ratio_threshold")]
    pub isolated_ratio_threshold: f64,
    /// Size of the most-complex list (default: 5)
    #[serde(default = "default_top_complex_count")]
    pub top_complex_count: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            complexity_threshold: default_complexity_threshold(),
            nesting_threshold: default_nesting_threshold(),
            isolated_ratio_threshold: default_isolated_ratio_threshold(),
            top_complex_count: default_top_complex_count(),
        }
    }
}

/// Layout direction for rendered diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiagramDirection {
    /// Top to bottom
    #[default]
    TD,
    /// Left to right
    LR,
}

/// Diagram rendering options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiagramConfig {
    /// Titles longer than this are truncated (default: 30)
    #[serde(default = "default_title_max_len")]
    pub title_max_len: usize,
    #[serde(default)]
    pub direction: DiagramDirection,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            title_max_len: default_title_max_len(),
            direction: DiagramDirection::default(),
        }
    }
}
