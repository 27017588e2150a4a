//! Core types for parsed `.toml` fixture files.

use layered_negation::{Sentence, Terminal};
use layered_negation_rules::{CueList, NegationAnnotator, RuleConfig};
use serde::{Deserialize, Serialize};

/// One terminal row: `[id, word, lemma, pos]`.
pub type TerminalRow = [String; 4];

/// A parsed negation fixture: one sentence, the cue list to annotate it
/// with, and the frames the rules are expected to produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NegationFixture {
    /// Optional human-readable title
    #[serde(default)]
    pub title: Option<String>,
    /// Sentence id, used as the frame id prefix
    #[serde(default = "default_sentence_id")]
    pub sentence: String,
    /// Known cue words; words not listed go through the guess rules
    #[serde(default)]
    pub cues: Vec<String>,
    /// Rule tables overriding the standard ones
    #[serde(default)]
    pub rules: Option<RuleConfig>,
    /// Terminals in sentence order
    pub terminals: Vec<TerminalRow>,
    /// Expected Negation frames in creation order
    #[serde(default)]
    pub frames: Vec<ExpectedFrame>,
}

/// Expected frame elements, given as surface words.
///
/// Split parts are named by their part word (`"los"` for the suffix of
/// `"zweifellos"`). Scope is compared without regard to order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpectedFrame {
    pub target: String,
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub negated: Option<String>,
    #[serde(default)]
    pub scope: Vec<String>,
}

fn default_sentence_id() -> String {
    "s1".to_string()
}

impl NegationFixture {
    /// Build the unannotated sentence.
    pub fn build_sentence(&self) -> Sentence {
        let terminals = self
            .terminals
            .iter()
            .map(|[id, word, lemma, pos]| {
                Terminal::new(id.as_str(), word.as_str(), lemma.as_str(), pos.as_str())
            })
            .collect();
        Sentence::new(self.sentence.as_str(), terminals)
    }

    pub fn cue_list(&self) -> CueList {
        self.cues.iter().collect()
    }

    /// Annotator over this fixture's cues and rule tables.
    pub fn annotator(&self) -> NegationAnnotator {
        let config = self.rules.clone().unwrap_or_else(RuleConfig::standard);
        NegationAnnotator::new(self.cue_list(), config)
    }

    /// The sentence words joined by single spaces.
    pub fn text(&self) -> String {
        self.terminals
            .iter()
            .map(|row| row[1].as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
