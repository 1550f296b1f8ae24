//! Engine configuration
//!
//! Every setting only changes how a search is scheduled or logged. Results
//! are identical under every configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Search engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Evaluate per-value facet counts on the rayon pool (default: true)
    #[serde(default = "default_parallel_facets")]
    pub parallel_facets: bool,

    /// Matched-set size below which facet counts run sequentially (default: 1024)
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Emit SEARCH_COMPLETE for every search (default: false)
    #[serde(default)]
    pub log_searches: bool,

    /// Emit ENGINE_BUILD_BEGIN / _COMPLETE / _FAILED around construction (default: false)
    #[serde(default)]
    pub log_builds: bool,
}

fn default_parallel_facets() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    1024
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_facets: default_parallel_facets(),
            parallel_threshold: default_parallel_threshold(),
            log_searches: false,
            log_builds: false,
        }
    }
}

impl EngineConfig {
    /// Parses a JSON document; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configuration that never leaves the calling thread for facet counts
    pub fn sequential() -> Self {
        Self {
            parallel_facets: false,
            ..Default::default()
        }
    }

    /// Whether a matched set of `matched` items is counted in parallel
    pub fn facets_in_parallel(&self, matched: usize) -> bool {
        self.parallel_facets && matched >= self.parallel_threshold
    }
}
