//! Evaluation policies.

use serde::{Deserialize, Serialize};

/// Choices the scoring leaves open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Whether a gold frame with no predicted partner adds a zero score to
    /// every role it carries. When off, such frames only show up in the
    /// counts.
    pub count_unpaired_gold: bool,
    /// Abort on a reference that does not resolve instead of scoring it as
    /// an empty word.
    pub strict_references: bool,
}

impl EvalConfig {
    pub fn standard() -> Self {
        Self {
            count_unpaired_gold: true,
            strict_references: false,
        }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::standard()
    }
}
