//! Parser for `.toml` negation fixtures.

use std::collections::HashSet;

use crate::{NegationFixture, SpecError, SpecResult};

/// Parse a fixture document.
///
/// Beyond the TOML shape, a fixture needs at least one terminal, unique
/// terminal ids and a non-empty target word on every expected frame.
pub fn parse_fixture(input: &str) -> SpecResult<NegationFixture> {
    let fixture: NegationFixture = toml::from_str(input).map_err(|e| SpecError::Parse {
        line: e
            .span()
            .map(|span| line_at(input, span.start))
            .unwrap_or(1),
        message: e.message().to_string(),
    })?;

    if fixture.terminals.is_empty() {
        return Err(SpecError::Parse {
            line: line_of(input, "terminals"),
            message: "fixture has no terminals".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for row in &fixture.terminals {
        if !seen.insert(row[0].as_str()) {
            return Err(SpecError::Parse {
                line: line_of(input, &format!("\"{}\"", row[0])),
                message: format!("duplicate terminal id {:?}", row[0]),
            });
        }
    }

    for (index, frame) in fixture.frames.iter().enumerate() {
        if frame.target.trim().is_empty() {
            return Err(SpecError::Parse {
                line: line_of(input, "[[frames]]"),
                message: format!("frame {} has an empty target", index),
            });
        }
    }

    Ok(fixture)
}

/// 1-based line of a byte offset.
fn line_at(input: &str, offset: usize) -> usize {
    let end = offset.min(input.len());
    input.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

/// 1-based line of the first occurrence of `needle`, or 1.
fn line_of(input: &str, needle: &str) -> usize {
    input
        .lines()
        .position(|line| line.contains(needle))
        .map_or(1, |idx| idx + 1)
}
