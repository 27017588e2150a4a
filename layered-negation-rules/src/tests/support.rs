use layered_negation::{FeNode, Frame, Sentence, Terminal};

use crate::{CueList, NegationAnnotator};

/// Build a sentence from `(word, lemma, pos)` rows; terminal ids are
/// `"<sid>_<n>"` counting from 1.
pub fn sentence(sid: &str, rows: &[(&str, &str, &str)]) -> Sentence {
    let terminals = rows
        .iter()
        .enumerate()
        .map(|(i, (word, lemma, pos))| {
            Terminal::new(format!("{}_{}", sid, i + 1), *word, *lemma, *pos)
        })
        .collect();
    Sentence::new(sid, terminals)
}

pub fn annotator(cues: &[&str]) -> NegationAnnotator {
    NegationAnnotator::with_cues(cues.iter().collect::<CueList>())
}

/// Surface word of a reference, terminal or split part.
pub fn word_of<'s>(sentence: &'s Sentence, node: &FeNode) -> &'s str {
    sentence
        .node(&node.idref)
        .and_then(|n| n.word())
        .unwrap_or_else(|| panic!("no word for {}", node.idref))
}

pub fn focus<'s>(sentence: &'s Sentence, frame: &Frame) -> Option<&'s str> {
    frame.focus().map(|n| word_of(sentence, n))
}

pub fn negated<'s>(sentence: &'s Sentence, frame: &Frame) -> Option<&'s str> {
    frame.negated().map(|n| word_of(sentence, n))
}

pub fn target<'s>(sentence: &'s Sentence, frame: &Frame) -> &'s str {
    word_of(sentence, frame.target())
}

pub fn scope<'s>(sentence: &'s Sentence, frame: &Frame) -> Vec<&'s str> {
    frame.scope().iter().map(|n| word_of(sentence, n)).collect()
}
