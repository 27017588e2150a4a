//! Error types for evaluation.

use layered_negation::NegationError;
use thiserror::Error;

/// Errors that abort an evaluation run.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Gold and predicted corpora do not have the same number of sentences.
    #[error("number of sentences does not match: gold {gold}, predicted {predicted}")]
    CorpusMismatch { gold: usize, predicted: usize },

    /// An evaluation failure within one named document.
    #[error("document {document}: {source}")]
    InDocument {
        document: String,
        #[source]
        source: Box<EvalError>,
    },

    /// A reference could not be resolved on a strict path.
    #[error(transparent)]
    Resolution(#[from] NegationError),
}

impl EvalError {
    pub(crate) fn in_document(self, document: &str) -> Self {
        EvalError::InDocument {
            document: document.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
