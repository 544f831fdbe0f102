//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::TraversalOrder;
use crate::problems::word_ladder::DEFAULT_ALPHABET;

/// Top-level graphwalk configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Graph construction defaults
    #[serde(default)]
    pub graph: GraphConfig,

    /// Traversal defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Word ladder settings
    #[serde(default)]
    pub ladder: LadderConfig,
}

/// Defaults applied when building a graph from an input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Whether edges are directed when the document does not say
    #[serde(default)]
    pub directed: bool,

    /// Weight assigned to edges listed without one
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: default_weight(),
        }
    }
}

/// Traversal settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Visitation order used when `--order` is not given
    #[serde(default)]
    pub order: TraversalOrder,
}

/// Word ladder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Letters tried at each position when generating neighbors
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}
