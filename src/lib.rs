#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Sentence graphs and negation frames for German negation annotation.
//!
//! A [`Sentence`] holds ordered terminals with word, lemma and STTS part of
//! speech, optional nonterminals grouping them, splitwords recording that a
//! terminal was divided into two parts, and the [`Frame`]s annotated on it.
//!
//! ## Crates
//!
//! - `layered-negation` (this crate): data model, graph resolution, frame
//!   building and display
//! - `layered-negation-rules`: cue classification and the splitword and
//!   cueword heuristics that produce Negation frames
//! - `layered-negation-eval`: comparison of predicted frames against gold
//!   frames with weighted precision, recall, F1 and Jaccard
//! - `layered-negation-specs`: TOML fixtures for end-to-end rule behavior
//!
//! ## Usage
//!
//! ```ignore
//! use layered_negation::{Role, Sentence, SentenceDisplay, Terminal};
//! use layered_negation_rules::{CueList, NegationAnnotator};
//!
//! let annotator = NegationAnnotator::with_cues(CueList::parse("nicht\n")?);
//! let mut sentence = Sentence::new("s1", vec![
//!     Terminal::new("s1_1", "Er", "er", "PPER"),
//!     Terminal::new("s1_2", "kommt", "kommen", "VVFIN"),
//!     Terminal::new("s1_3", "nicht", "nicht", "PTKNEG"),
//!     Terminal::new("s1_4", ".", "--", "$."),
//! ]);
//! annotator.annotate(&mut sentence);
//!
//! println!("{}", SentenceDisplay::new(&sentence).with_all_roles());
//! ```

mod builder;
mod display;
mod errors;
mod frame;
mod resolve;
mod sentence;

pub use builder::{FrameBuilder, SplitWordIds};
pub use display::SentenceDisplay;
pub use errors::{NegationError, NegationResult};
pub use frame::{FeNode, Frame, Role, RoleSlot, NEGATION_FRAME_NAME};
pub use resolve::{flatten, GraphResolver, Resolved};
pub use sentence::{
    Edge, Node, Nonterminal, Sentence, SplitWord, SplitWordPart, Terminal, TerminalView,
};
