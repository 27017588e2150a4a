//! Sentence annotation driver.

use layered_negation::Sentence;
use log::debug;

use crate::{cueword, splitword, CueClass, CueClassifier, CueList, RuleConfig};

/// Runs the splitword and cueword rules over sentences.
///
/// Terminals are visited left to right. A known cue runs every splitword
/// rule and then the cueword rules; an unknown word runs only the guess
/// variants. Existing frames are kept; new frame ids continue after them.
#[derive(Debug, Clone)]
pub struct NegationAnnotator {
    classifier: CueClassifier,
    config: RuleConfig,
}

impl NegationAnnotator {
    pub fn new(cues: CueList, config: RuleConfig) -> Self {
        Self {
            classifier: CueClassifier::new(cues),
            config,
        }
    }

    /// Annotator over the built-in rule tables.
    pub fn with_cues(cues: CueList) -> Self {
        Self::new(cues, RuleConfig::standard())
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn classifier(&self) -> &CueClassifier {
        &self.classifier
    }

    /// Add Negation frames to `sentence`. Returns the number of frames added.
    pub fn annotate(&self, sentence: &mut Sentence) -> usize {
        let (terminals, mut builder) = sentence.annotation_parts();
        let before = builder.negation_frame_count();

        for terminal in terminals.iter() {
            match self.classifier.classify(terminal) {
                CueClass::Known(word) => {
                    for split in splitword::detect(terminal, &self.config) {
                        splitword::apply(&split, terminal, &mut builder);
                    }
                    if cueword::detect(&word).is_some() {
                        cueword::apply(terminal, &word, terminals, &mut builder, &self.config);
                    }
                }
                CueClass::Unknown(word) => {
                    for split in splitword::guess(terminal, &self.config) {
                        splitword::apply(&split, terminal, &mut builder);
                    }
                    if cueword::guess(&word).is_some() {
                        cueword::apply(terminal, &word, terminals, &mut builder, &self.config);
                    }
                }
                CueClass::Ignored => {}
            }
        }

        let added = builder.negation_frame_count() - before;
        debug!("sentence {}: {} negation frames", builder.sentence_id(), added);
        added
    }

    /// Annotate every sentence in corpus order. Returns the total number of
    /// frames added.
    pub fn annotate_corpus(&self, sentences: &mut [Sentence]) -> usize {
        sentences.iter_mut().map(|s| self.annotate(s)).sum()
    }
}
