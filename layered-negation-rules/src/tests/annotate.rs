use layered_negation::{FeNode, Frame, SentenceDisplay};

use super::support::*;

fn er_kommt_nicht() -> layered_negation::Sentence {
    sentence(
        "s1",
        &[
            ("Er", "er", "PPER"),
            ("kommt", "kommen", "VVFIN"),
            ("nicht", "nicht", "PTKNEG"),
            (".", "--", "$."),
        ],
    )
}

#[test]
fn test_display_annotated_sentence() {
    let mut s = er_kommt_nicht();
    annotator(&["nicht"]).annotate(&mut s);

    let display = SentenceDisplay::new(&s).with_all_roles();

    insta::assert_snapshot!(display, @r###"
    Er  kommt  nicht  .
               ╰───╯Target s1_f0
        ╰───╯Negated s1_f0
        ╰───╯Scope s1_f0
    ╰╯Scope s1_f0
    "###);
}

#[test]
fn test_deserialized_sentence_annotates_like_a_built_one() {
    // stored positions are ignored and recomputed from terminal order
    let mut s: layered_negation::Sentence = toml::from_str(
        r#"
        id = "p1"

        [[terminals]]
        id = "p1_1"
        word = "Er"
        lemma = "er"
        pos = "PPER"
        position = 9

        [[terminals]]
        id = "p1_2"
        word = "kommt"
        lemma = "kommen"
        pos = "VVFIN"

        [[terminals]]
        id = "p1_3"
        word = "nicht"
        lemma = "nicht"
        pos = "PTKNEG"
        position = 0

        [[terminals]]
        id = "p1_4"
        word = "."
        lemma = "--"
        pos = "$."
        "#,
    )
    .unwrap();

    let positions: Vec<_> = s.terminals().iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3]);

    assert_eq!(annotator(&["nicht"]).annotate(&mut s), 1);
    let frame = &s.frames()[0];
    let scope_ids: Vec<_> = frame.scope().iter().map(|n| n.idref.as_str()).collect();
    assert_eq!(scope_ids, vec!["p1_2", "p1_1"]);
    assert_eq!(negated(&s, frame), Some("kommt"));

    insta::assert_snapshot!(SentenceDisplay::new(&s).with_all_roles(), @r###"
    Er  kommt  nicht  .
               ╰───╯Target p1_f0
        ╰───╯Negated p1_f0
        ╰───╯Scope p1_f0
    ╰╯Scope p1_f0
    "###);
}

#[test]
fn test_no_cues_no_frames() {
    let mut s = sentence(
        "40",
        &[
            ("Der", "die", "ART"),
            ("Hund", "Hund", "NN"),
            ("bellt", "bellen", "VVFIN"),
            ("laut", "laut", "ADJD"),
            (".", "--", "$."),
        ],
    );
    let before = s.clone();
    assert_eq!(annotator(&["nicht", "kein", "zweifellos"]).annotate(&mut s), 0);
    assert_eq!(s, before);
}

#[test]
fn test_frame_ids_follow_creation_order() {
    let mut s = sentence(
        "41",
        &[
            ("Der", "die", "ART"),
            ("zweifellos", "zweifellos", "ADV"),
            ("unklare", "unklar", "ADJA"),
            ("Satz", "Satz", "NN"),
            ("ist", "sein", "VAFIN"),
            ("nicht", "nicht", "PTKNEG"),
            ("gut", "gut", "ADJD"),
            (".", "--", "$."),
        ],
    );
    assert_eq!(annotator(&["zweifellos", "nicht"]).annotate(&mut s), 3);

    let ids: Vec<_> = s.frames().iter().map(|f| f.id()).collect();
    assert_eq!(ids, vec!["41_f0", "41_f1", "41_f2"]);
    let targets: Vec<_> = s.frames().iter().map(|f| target(&s, f)).collect();
    assert_eq!(targets, vec!["los", "un", "nicht"]);
    assert_eq!(focus(&s, &s.frames()[2]), Some("gut"));
}

#[test]
fn test_existing_frames_are_kept() {
    let mut s = er_kommt_nicht();
    s.push_frame(Frame::named("s1_c0", "Causation", FeNode::new("s1_2")));

    assert_eq!(annotator(&["nicht"]).annotate(&mut s), 1);
    assert_eq!(s.frames().len(), 2);
    assert_eq!(s.frames()[1].id(), "s1_f0");
}

#[test]
fn test_reannotation_after_removing_frames() {
    let mut s = sentence(
        "42",
        &[("grundlos", "grundlos", "ADJD"), ("nicht", "nicht", "PTKNEG")],
    );
    let annotator = annotator(&["grundlos", "nicht"]);
    annotator.annotate(&mut s);
    let first = s.clone();

    // A second pass without clearing stacks new frames after the old ones.
    assert_eq!(annotator.annotate(&mut s), 2);
    assert_eq!(s.frames()[2].id(), "42_f2");

    assert_eq!(s.remove_negation_frames(), 4);
    annotator.annotate(&mut s);
    assert_eq!(s, first);
}

#[test]
fn test_annotate_corpus() {
    let mut corpus = vec![
        er_kommt_nicht(),
        sentence("s2", &[("Keiner", "keiner", "PIS"), ("lacht", "lachen", "VVFIN")]),
        sentence("s3", &[("Alles", "alle", "PIS"), ("gut", "gut", "ADJD")]),
    ];
    let added = annotator(&["nicht", "keiner"]).annotate_corpus(&mut corpus);
    assert_eq!(added, 2);

    let counts: Vec<_> = corpus.iter().map(|s| s.negation_frames().count()).collect();
    assert_eq!(counts, vec![1, 1, 0]);
    assert_eq!(focus(&corpus[1], &corpus[1].frames()[0]), Some("lacht"));
}
