#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Rule-based negation annotation for German sentences.
//!
//! Each terminal is classified against a [`CueList`]. Known cues run the
//! five [`splitword`] rules and the whole-word [`cueword`] rules; unknown
//! words run only their guess variants. Every firing rule opens one
//! Negation frame on the sentence.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_negation::{Sentence, Terminal};
//! use layered_negation_rules::{CueList, NegationAnnotator};
//!
//! let cues = CueList::parse("nicht\nzweifellos\n")?;
//! let annotator = NegationAnnotator::with_cues(cues);
//!
//! let mut sentence = Sentence::new("s1", vec![
//!     Terminal::new("s1_1", "Er", "er", "PPER"),
//!     Terminal::new("s1_2", "kommt", "kommen", "VVFIN"),
//!     Terminal::new("s1_3", "nicht", "nicht", "PTKNEG"),
//!     Terminal::new("s1_4", ".", "--", "$."),
//! ]);
//! assert_eq!(annotator.annotate(&mut sentence), 1);
//! ```

mod annotate;
mod classifier;
mod config;
mod cue_list;
pub mod cueword;
mod errors;
pub mod splitword;

pub use annotate::NegationAnnotator;
pub use classifier::{CueClass, CueClassifier};
pub use config::{RuleConfig, TagSet};
pub use cue_list::CueList;
pub use cueword::CueTrigger;
pub use errors::{RulesError, RulesResult};
pub use splitword::{MarkerSide, Split, SplitRule};

#[cfg(test)]
mod tests {
    mod support;

    mod annotate;
    mod cuewords;
    mod splitwords;
}
