#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Fixture-driven regression testing for layered-negation rules.
//!
//! Each fixture is a `.toml` file holding one sentence, the cue list to
//! annotate it with, optional rule table overrides and the Negation frames
//! the rules should produce, with every element given as surface words:
//!
//! ```toml
//! title = "nicht after a finite verb"
//! cues = ["nicht"]
//! terminals = [
//!     ["s1_1", "Er", "er", "PPER"],
//!     ["s1_2", "kommt", "kommen", "VVFIN"],
//!     ["s1_3", "nicht", "nicht", "PTKNEG"],
//! ]
//!
//! [[frames]]
//! target = "nicht"
//! negated = "kommt"
//! scope = ["Er", "kommt"]
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - Parses fixture files and checks their shape
//! - [`fixture`] - Fixture types and sentence construction
//! - [`loader`] - Loading fixtures from disk
//! - [`runner`] - Runs the annotator and reads frames back as words
//! - [`matcher`] - Field-level comparison of expected and observed frames
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML
//! - [`errors`] - Error types

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod matcher;
pub mod parser;
pub mod runner;

pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{ExpectedFrame, NegationFixture, TerminalRow};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use matcher::{check_fixture, check_frame, FieldMismatch, FrameOutcome, FrameResult};
pub use parser::parse_fixture;
pub use runner::{run_fixture, FixtureRun, ObservedFrame};

#[cfg(test)]
mod tests;
