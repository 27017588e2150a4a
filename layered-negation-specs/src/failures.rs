//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{FrameOutcome, SpecError, SpecResult};

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture path relative to the fixtures directory.
    pub fixture: String,
    /// Frame reference, e.g. "F1" for the second frame in creation order.
    pub frame: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
    }

    /// Check if a failure is expected.
    pub fn is_expected(&self, fixture: &str, frame_ref: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, frame_ref)) {
            return FailureState::Known;
        }
        if self.pending.iter().any(|e| e.matches(fixture, frame_ref)) {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    /// Format a frame reference from its creation index.
    pub fn format_ref(frame_index: usize) -> String {
        format!("F{}", frame_index)
    }

    /// Get all expected failure fixtures.
    pub fn all_fixtures(&self) -> Vec<&str> {
        let mut fixtures: Vec<_> = self
            .known
            .iter()
            .chain(self.pending.iter())
            .map(|e| e.fixture.as_str())
            .collect();
        fixtures.sort();
        fixtures.dedup();
        fixtures
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, frame_ref: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, frame_ref))
    }
}

impl FailureEntry {
    fn matches(&self, fixture: &str, frame_ref: &str) -> bool {
        self.fixture == fixture && self.frame == frame_ref
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default)]
pub struct HarnessResult {
    /// Total frames checked.
    pub total: usize,
    /// Passed frames.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    /// Check if all tests passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    /// Record a passed frame.
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed frame with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }

    /// Record an outcome, looking up failures in `expected`. Returns the
    /// failure state, or `None` for a pass.
    pub fn record(
        &mut self,
        expected: &ExpectedFailures,
        fixture: &str,
        frame_index: usize,
        outcome: &FrameOutcome,
    ) -> Option<FailureState> {
        if outcome.is_pass() {
            self.record_pass();
            return None;
        }
        let state = expected.is_expected(fixture, &ExpectedFailures::format_ref(frame_index));
        self.record_failure(state);
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn entry(fixture: &str, frame: &str) -> FailureEntry {
        FailureEntry {
            fixture: fixture.to_string(),
            frame: frame.to_string(),
            reason: None,
            added: None,
        }
    }

    #[test]
    fn test_is_expected_regression() {
        let failures = ExpectedFailures::default();
        assert_eq!(failures.count(), 0);
        assert_eq!(
            failures.is_expected("test.toml", "F0"),
            FailureState::Regression
        );
    }

    #[test]
    fn test_known_wins_over_pending() {
        let failures = ExpectedFailures {
            known: vec![entry("test.toml", "F0")],
            pending: vec![entry("test.toml", "F0"), entry("test.toml", "F1")],
        };

        assert_eq!(failures.is_expected("test.toml", "F0"), FailureState::Known);
        assert_eq!(failures.is_expected("test.toml", "F1"), FailureState::Pending);
        assert_eq!(failures.is_expected("other.toml", "F1"), FailureState::Regression);
    }

    #[test]
    fn test_format_ref() {
        assert_eq!(ExpectedFailures::format_ref(0), "F0");
        assert_eq!(ExpectedFailures::format_ref(12), "F12");
    }

    #[test]
    fn test_harness_result_record() {
        let failures = ExpectedFailures {
            known: vec![entry("a.toml", "F1")],
            pending: vec![],
        };
        let mut result = HarnessResult::new();
        assert_eq!(result.exit_code(), 0);

        assert_eq!(result.record(&failures, "a.toml", 0, &FrameOutcome::Passed), None);
        assert_eq!(
            result.record(&failures, "a.toml", 1, &FrameOutcome::Missing),
            Some(FailureState::Known)
        );
        assert_eq!(result.expected_failures, 1);
        assert!(result.success());

        assert_eq!(
            result.record(&failures, "a.toml", 2, &FrameOutcome::Missing),
            Some(FailureState::Regression)
        );
        assert_eq!(result.total, 3);
        assert_eq!(result.passed, 1);
        assert_eq!(result.regressions, 1);
        assert!(!result.success());
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[[pending]]
fixture = "test.toml"
frame = "F0"
reason = "Awaiting implementation"
added = "2025-01-06"

[[known]]
fixture = "other.toml"
frame = "F2"
reason = "Known limitation"
"#
        )
        .unwrap();

        let failures = ExpectedFailures::load(file.path()).unwrap();
        assert_eq!(failures.count(), 2);
        assert_eq!(failures.is_expected("test.toml", "F0"), FailureState::Pending);
        assert_eq!(failures.is_expected("other.toml", "F2"), FailureState::Known);
        assert_eq!(failures.all_fixtures(), vec!["other.toml", "test.toml"]);
        assert_eq!(
            failures.get_entry("other.toml", "F2").and_then(|e| e.reason.as_deref()),
            Some("Known limitation")
        );
        assert!(failures.get_entry("other.toml", "F0").is_none());
    }

    #[test]
    fn test_load_malformed_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[known]]\nfixture = \"a.toml\"").unwrap();
        assert!(matches!(
            ExpectedFailures::load(file.path()),
            Err(SpecError::Load { .. })
        ));
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let failures = ExpectedFailures::load(Path::new("/nonexistent/path.toml")).unwrap();
        assert_eq!(failures.count(), 0);
    }
}
