//! Error types for sentence graphs and frame references.

use thiserror::Error;

/// Errors raised while looking up or resolving nodes of a sentence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NegationError {
    /// An idref points at no terminal, splitword part or nonterminal, or its
    /// expansion never reaches the leaves (cycle, depth cap).
    #[error("unresolved reference `{id}`: {reason}")]
    UnresolvedReference { id: String, reason: String },

    /// Two nodes of one sentence share an id.
    #[error("duplicate node id `{id}` in sentence {sentence}")]
    DuplicateNode { sentence: String, id: String },
}

impl NegationError {
    pub fn unresolved(id: impl Into<String>, reason: impl Into<String>) -> Self {
        NegationError::UnresolvedReference {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for sentence graph operations.
pub type NegationResult<T> = Result<T, NegationError>;
