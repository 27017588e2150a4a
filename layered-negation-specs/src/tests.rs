use crate::{
    check_fixture, format_failure, format_summary, load_all_fixtures, load_fixture, run_fixture,
    ExpectedFailures, FailureState, FrameOutcome, HarnessResult, NegationFixture,
};
use layered_negation::SentenceDisplay;
use std::path::{Path, PathBuf};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and parse a fixture file from the fixtures directory.
fn fixture(name: &str) -> NegationFixture {
    load_fixture(&fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

#[test]
fn test_all_fixtures_without_regressions() {
    let expected = ExpectedFailures::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"),
    )
    .unwrap();
    let fixtures = load_all_fixtures(&fixtures_dir()).unwrap();
    assert!(!fixtures.is_empty());

    let mut harness = HarnessResult::new();
    let mut report = String::new();

    for (name, fixture) in &fixtures {
        let run = run_fixture(fixture).unwrap_or_else(|e| panic!("{}: {}", name, e));
        let results = check_fixture(fixture, &run.frames);

        let mut fixture_result = HarnessResult::new();
        for result in &results {
            let state = fixture_result.record(&expected, name, result.index, &result.outcome);
            harness.record(&expected, name, result.index, &result.outcome);
            if state == Some(FailureState::Regression) {
                report.push_str(&format_failure(name, fixture, result));
            }
        }
        if !fixture_result.success() {
            report.push_str(&format_summary(
                name,
                fixture_result.passed,
                fixture_result.total - fixture_result.passed,
                fixture_result.expected_failures,
                fixture_result.regressions,
            ));
        }
    }

    assert!(harness.success(), "{}", report);
    assert_eq!(harness.expected_failures, expected.count());
}

#[test]
fn test_expected_failures_name_existing_fixtures() {
    let expected = ExpectedFailures::load(
        &Path::new(env!("CARGO_MANIFEST_DIR")).join("expected-failures.toml"),
    )
    .unwrap();
    for name in expected.all_fixtures() {
        assert!(fixtures_dir().join(name).is_file(), "missing fixture {}", name);
    }
}

#[test]
fn test_double_splitword_fixture_yields_extra_frame() {
    let fixture = fixture("splitword-double-rule.toml");
    let run = run_fixture(&fixture).unwrap();
    let results = check_fixture(&fixture, &run.frames);

    assert_eq!(results.len(), 2);
    assert!(results[0].outcome.is_pass());
    match &results[1].outcome {
        FrameOutcome::Unexpected(frame) => {
            assert_eq!(frame.id, "13_f1");
            assert_eq!(frame.target, "frei");
            assert_eq!(frame.focus.as_deref(), Some("unkosten"));
        }
        other => panic!("expected an unexpected frame, got {:?}", other),
    }
}

#[test]
fn test_custom_rule_tables_change_scope() {
    let mut fixture = fixture("custom-rule-tables.toml");
    let run = run_fixture(&fixture).unwrap();
    assert!(check_fixture(&fixture, &run.frames).iter().all(|r| r.outcome.is_pass()));

    fixture.rules = None;
    let run = run_fixture(&fixture).unwrap();
    let mut scope = run.frames[0].scope.clone();
    scope.sort();
    assert_eq!(scope, vec!["Er", "heute", "kommt", "morgen", "sondern"]);
}

#[test]
fn test_fixture_display() {
    let fixture = fixture("nicht-particle.toml");
    let run = run_fixture(&fixture).unwrap();

    let display = SentenceDisplay::new(&run.sentence).with_all_roles();
    insta::assert_snapshot!(display, @r###"
    Er  kommt  heute  nicht  .
                      ╰───╯Target 1_f0
        ╰───╯Negated 1_f0
               ╰───╯Scope 1_f0
        ╰───╯Scope 1_f0
    ╰╯Scope 1_f0
    "###);
}
