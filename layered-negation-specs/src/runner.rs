//! Runs a fixture through the negation rules and reads the frames back as
//! surface words.

use layered_negation::{FeNode, Frame, GraphResolver, Sentence};

use crate::{NegationFixture, SpecError, SpecResult};

/// A Negation frame as words, ready to compare with an [`crate::ExpectedFrame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedFrame {
    pub id: String,
    pub target: String,
    pub focus: Option<String>,
    pub negated: Option<String>,
    pub scope: Vec<String>,
}

/// Result of running one fixture.
#[derive(Debug)]
pub struct FixtureRun {
    /// The annotated sentence
    pub sentence: Sentence,
    /// Its Negation frames in creation order
    pub frames: Vec<ObservedFrame>,
}

/// Annotate the fixture's sentence with its cues and rule tables.
pub fn run_fixture(fixture: &NegationFixture) -> SpecResult<FixtureRun> {
    let mut sentence = fixture.build_sentence();
    sentence.validate().map_err(|e| SpecError::Assertion {
        message: e.to_string(),
    })?;

    fixture.annotator().annotate(&mut sentence);

    let resolver = GraphResolver::new();
    let frames = sentence
        .negation_frames()
        .map(|frame| observe(&resolver, &sentence, frame))
        .collect::<SpecResult<Vec<_>>>()?;

    Ok(FixtureRun { sentence, frames })
}

fn observe(resolver: &GraphResolver, sentence: &Sentence, frame: &Frame) -> SpecResult<ObservedFrame> {
    let words = |node: &FeNode| -> SpecResult<String> {
        resolver
            .resolve_words(&node.idref, sentence)
            .map(|words| words.join(" "))
            .map_err(|e| SpecError::Assertion {
                message: format!("frame {}: {}", frame.id(), e),
            })
    };

    Ok(ObservedFrame {
        id: frame.id().to_string(),
        target: words(frame.target())?,
        focus: frame.focus().map(words).transpose()?,
        negated: frame.negated().map(words).transpose()?,
        scope: frame.scope().iter().map(words).collect::<SpecResult<_>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    #[test]
    fn test_run_reads_split_parts_as_words() {
        let fixture = parse_fixture(
            r#"
cues = ["furchtlos"]
sentence = "7"
terminals = [
    ["7_1", "Sie", "sie", "PPER"],
    ["7_2", "blieb", "bleiben", "VVFIN"],
    ["7_3", "furchtlos", "furchtlos", "ADJD"],
]
"#,
        )
        .unwrap();

        let run = run_fixture(&fixture).unwrap();
        assert_eq!(
            run.frames,
            vec![ObservedFrame {
                id: "7_f0".to_string(),
                target: "los".to_string(),
                focus: Some("furcht".to_string()),
                negated: Some("furcht".to_string()),
                scope: vec!["furcht".to_string()],
            }]
        );
        assert_eq!(run.sentence.splitwords().len(), 1);
    }

    #[test]
    fn test_run_without_cues_finds_nothing() {
        let fixture = parse_fixture(
            r#"terminals = [["1", "Er", "er", "PPER"], ["2", "schläft", "schlafen", "VVFIN"]]"#,
        )
        .unwrap();
        let run = run_fixture(&fixture).unwrap();
        assert!(run.frames.is_empty());
    }
}
