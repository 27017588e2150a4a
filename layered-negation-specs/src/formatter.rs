//! Rich error formatting for frame mismatches.

use std::fmt::{self, Write};

use crate::{ExpectedFrame, FrameOutcome, FrameResult, NegationFixture, ObservedFrame};

/// Format a failed frame check with the sentence and a caret under the
/// target word.
pub fn format_failure(fixture_name: &str, fixture: &NegationFixture, result: &FrameResult) -> String {
    let mut output = String::new();
    // Writing to a String cannot fail.
    let _ = write_failure(&mut output, fixture_name, fixture, result);
    output
}

/// Format a summary line for one fixture.
pub fn format_summary(
    fixture_name: &str,
    passed: usize,
    failed: usize,
    expected_failures: usize,
    regressions: usize,
) -> String {
    let status = if regressions > 0 { "FAIL" } else { "PASS" };
    format!(
        "\n{}: {}\n  {} passed, {} failed ({} expected, {} regressions)\n",
        status, fixture_name, passed, failed, expected_failures, regressions
    )
}

fn write_failure(
    output: &mut String,
    fixture_name: &str,
    fixture: &NegationFixture,
    result: &FrameResult,
) -> fmt::Result {
    let expected = fixture.frames.get(result.index);

    writeln!(output, "\nFAIL: {} F{}", fixture_name, result.index)?;
    writeln!(output)?;

    writeln!(output, "  {}", fixture.text())?;
    let target = match &result.outcome {
        FrameOutcome::Unexpected(frame) => Some(frame.target.as_str()),
        _ => expected.map(|e| e.target.as_str()),
    };
    if let Some((column, width)) = target.and_then(|t| locate(fixture, t)) {
        writeln!(output, "  {}{}", " ".repeat(column), "^".repeat(width))?;
    }
    writeln!(output)?;

    match &result.outcome {
        FrameOutcome::Failed(fields) => {
            let target = expected.map_or("", |e| e.target.as_str());
            writeln!(output, "  frame F{} differs for target \"{}\":", result.index, target)?;
            for field in fields {
                writeln!(
                    output,
                    "    \u{2717} {}: expected `{}`, found `{}`",
                    field.field, field.expected, field.actual
                )?;
            }
        }
        FrameOutcome::Missing => {
            writeln!(output, "  frame F{} was expected but not produced", result.index)?;
        }
        FrameOutcome::Unexpected(frame) => {
            writeln!(
                output,
                "  frame F{} was produced but not expected: {}",
                result.index,
                describe_observed(frame)
            )?;
        }
        FrameOutcome::Passed => {
            writeln!(output, "  (passed)")?;
        }
    }

    if let Some(expected) = expected {
        writeln!(output)?;
        writeln!(output, "  Expected: {}", describe_expected(expected))?;
    }

    if let Some(hint) = generate_hint(fixture, expected, &result.outcome) {
        writeln!(output)?;
        writeln!(output, "  hint: {}", hint)?;
    }

    Ok(())
}

/// Display column and width of the first terminal containing `target`,
/// case-insensitively.
fn locate(fixture: &NegationFixture, target: &str) -> Option<(usize, usize)> {
    let needle = target.to_lowercase();
    let mut column = 0;
    for row in &fixture.terminals {
        let word = row[1].to_lowercase();
        if let Some(byte_idx) = word.find(&needle) {
            let offset = word[..byte_idx].chars().count();
            return Some((column + offset, needle.chars().count().max(1)));
        }
        column += row[1].chars().count() + 1;
    }
    None
}

fn describe_expected(frame: &ExpectedFrame) -> String {
    format!(
        "target={}, focus={}, negated={}, scope=[{}]",
        frame.target,
        frame.focus.as_deref().unwrap_or("-"),
        frame.negated.as_deref().unwrap_or("-"),
        frame.scope.join(", ")
    )
}

fn describe_observed(frame: &ObservedFrame) -> String {
    format!(
        "{} target={}, focus={}, negated={}, scope=[{}]",
        frame.id,
        frame.target,
        frame.focus.as_deref().unwrap_or("-"),
        frame.negated.as_deref().unwrap_or("-"),
        frame.scope.join(", ")
    )
}

fn generate_hint(
    fixture: &NegationFixture,
    expected: Option<&ExpectedFrame>,
    outcome: &FrameOutcome,
) -> Option<String> {
    match outcome {
        FrameOutcome::Missing => {
            let target = expected?.target.to_lowercase();
            if fixture.cue_list().contains(&target) {
                Some(format!(
                    "`{}` is a known cue, so no rule matched it - check its POS against the rule tables",
                    target
                ))
            } else {
                Some(format!(
                    "`{}` is not in the cue list, so only the guess rules ran on it",
                    target
                ))
            }
        }
        FrameOutcome::Unexpected(frame) => Some(format!(
            "add a [[frames]] entry for `{}` or record it in expected-failures.toml",
            frame.target
        )),
        FrameOutcome::Failed(fields) => {
            if fields.iter().any(|f| f.field == "focus") {
                Some("focus is set once - the first rule that finds a candidate wins".to_string())
            } else if fields.iter().any(|f| f.field == "scope") {
                Some(
                    "scope is bounded by scope_start_pos on the left and by scope_end_pos or scope_end_lemmas on the right"
                        .to_string(),
                )
            } else {
                None
            }
        }
        FrameOutcome::Passed => None,
    }
}
