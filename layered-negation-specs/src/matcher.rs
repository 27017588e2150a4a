//! Comparison of observed frames against expected frames.

use crate::{ExpectedFrame, NegationFixture, ObservedFrame};

/// A single field that differs between expected and observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Outcome of checking one frame position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    Passed,
    Failed(Vec<FieldMismatch>),
    /// Expected, but the rules produced fewer frames.
    Missing,
    /// Produced by the rules, but not expected.
    Unexpected(ObservedFrame),
}

impl FrameOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, FrameOutcome::Passed)
    }
}

/// Outcome for the frame at `index` in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameResult {
    pub index: usize,
    pub outcome: FrameOutcome,
}

/// Compare the expected frames with the observed ones, pairing them by
/// creation order.
pub fn check_fixture(fixture: &NegationFixture, observed: &[ObservedFrame]) -> Vec<FrameResult> {
    let len = fixture.frames.len().max(observed.len());
    (0..len)
        .map(|index| {
            let outcome = match (fixture.frames.get(index), observed.get(index)) {
                (Some(expected), Some(actual)) => check_frame(expected, actual),
                (Some(_), None) => FrameOutcome::Missing,
                (None, Some(actual)) => FrameOutcome::Unexpected(actual.clone()),
                (None, None) => FrameOutcome::Passed,
            };
            FrameResult { index, outcome }
        })
        .collect()
}

/// Field-level comparison of one frame.
pub fn check_frame(expected: &ExpectedFrame, actual: &ObservedFrame) -> FrameOutcome {
    let mut fields = Vec::new();

    if expected.target != actual.target {
        fields.push(FieldMismatch {
            field: "target",
            expected: expected.target.clone(),
            actual: actual.target.clone(),
        });
    }
    if expected.focus != actual.focus {
        fields.push(FieldMismatch {
            field: "focus",
            expected: optional(&expected.focus),
            actual: optional(&actual.focus),
        });
    }
    if expected.negated != actual.negated {
        fields.push(FieldMismatch {
            field: "negated",
            expected: optional(&expected.negated),
            actual: optional(&actual.negated),
        });
    }

    let expected_scope = sorted(&expected.scope);
    let actual_scope = sorted(&actual.scope);
    if expected_scope != actual_scope {
        fields.push(FieldMismatch {
            field: "scope",
            expected: format!("[{}]", expected_scope.join(", ")),
            actual: format!("[{}]", actual_scope.join(", ")),
        });
    }

    if fields.is_empty() {
        FrameOutcome::Passed
    } else {
        FrameOutcome::Failed(fields)
    }
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn sorted(words: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = words.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}
