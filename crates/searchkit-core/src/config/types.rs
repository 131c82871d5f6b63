//! Configuration type definitions

use crate::search::Priority;
use serde::{Deserialize, Serialize};

/// Default settings for the searches that take tuning parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidates kept per beam search generation
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,

    /// Beam search generation bound (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,

    /// Deepest limit iterative deepening may try (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Frontier key for best-first search
    #[serde(default)]
    pub priority: Priority,
}

fn default_beam_width() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: default_beam_width(),
            max_iterations: None,
            max_depth: None,
            priority: Priority::default(),
        }
    }
}
