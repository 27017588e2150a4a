#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Evaluation of predicted negation frames against a gold standard.
//!
//! For every Negation frame pair the words of each role are extracted,
//! sorted, padded to equal length and binarized against the gold words.
//! Weighted precision, recall and F1 are computed per role, plus Jaccard
//! similarity for Scope, and summed over the corpus. Averages with no
//! scored frame are reported as undefined.
//!
//! ## Usage
//!
//! ```ignore
//! use layered_negation::Role;
//! use layered_negation_eval::{Evaluator, Metric};
//!
//! let report = Evaluator::default().evaluate(&gold, &predicted)?;
//! println!("{}", report);
//! let scope_f1 = report.average(Role::Scope, Metric::F1);
//! ```

mod accumulator;
mod config;
mod errors;
mod evaluator;
mod extract;
pub mod metrics;
mod report;

pub use accumulator::{Counts, RoleSums, ScoreAccumulator};
pub use config::EvalConfig;
pub use errors::{EvalError, EvalResult};
pub use evaluator::{Document, Evaluator};
pub use extract::RoleExtractor;
pub use metrics::{binarize, binarize_scope, jaccard, pad_to_equal_length, weighted_scores, MetricSet, WeightedScores};
pub use report::{Average, CorpusReport, EvaluationReport, Metric, RoleReport};
