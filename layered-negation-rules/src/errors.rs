//! Error types for rule configuration and cue lists.

use thiserror::Error;

/// Errors that can occur while loading rule tables or cue lists.
#[derive(Debug, Error)]
pub enum RulesError {
    /// A rule configuration could not be parsed.
    #[error("invalid rule configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A cue list line could not be parsed.
    #[error("cue list line {line}: {message}")]
    CueList { line: usize, message: String },
}

/// Result type for rule loading.
pub type RulesResult<T> = Result<T, RulesError>;
