use layered_negation::Role;

use super::evaluate::{frame, with_frames};
use crate::Evaluator;

fn mixed_report() -> crate::EvaluationReport {
    let gold = vec![with_frames("1", vec![frame("1", 0, 4, Some(5), None, &[1, 2, 3, 5])])];
    let predicted = vec![with_frames("1", vec![frame("1", 0, 4, Some(3), None, &[2, 3, 5, 6])])];
    Evaluator::default().evaluate(&gold, &predicted).unwrap()
}

#[test]
fn test_report_display() {
    let report = mixed_report();

    insta::assert_snapshot!(report, @r###"
    Sentences:                 1
    Negation gold frames:      1
    Negation predicted frames: 1
    Paired frames:             1

    ----- CUEWORDS -----
    Frames scored:             1
    Precision:                 1.0000
    Recall:                    1.0000
    F1 score:                  1.0000

    ----- FOCUS -----
    Frames scored:             1
    Precision:                 0.0000
    Recall:                    0.0000
    F1 score:                  0.0000

    ----- NEGATED -----
    Frames scored:             0
    Precision:                 undefined
    Recall:                    undefined
    F1 score:                  undefined

    ----- SCOPE -----
    Scope gold frames:         1
    Scope predicted frames:    1
    Frames scored:             1
    Precision:                 1.0000
    Recall:                    0.7500
    F1 score:                  0.8571
    Jaccard similarity:        0.6000
    "###);
}

#[test]
fn test_report_json() {
    let report = mixed_report();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["counts"]["paired_frames"], 1);
    assert_eq!(json["roles"][0]["role"], "Target");
    assert_eq!(json["roles"][0]["f1"], 1.0);
    assert!(json["roles"][0].get("jaccard").is_none());
    assert_eq!(json["roles"][2]["precision"], "undefined");
    assert_eq!(json["roles"][3]["jaccard"], 0.6);
}

#[test]
fn test_role_report() {
    let report = mixed_report();
    let scope = report.role(Role::Scope);
    assert_eq!(scope.frames, 1);
    assert_eq!(scope.recall.value(), Some(0.75));
    assert_eq!(report.role(Role::Negated).f1.value(), None);
}
