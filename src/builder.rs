//! Frame lifecycle during annotation.

use log::debug;

use crate::{FeNode, Frame, SplitWord, SplitWordPart, Terminal};

/// Ids of the two parts created by [`FrameBuilder::split_word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitWordIds {
    pub first: String,
    pub second: String,
}

/// Appends frames and splitwords to one sentence.
///
/// Obtained from [`crate::Sentence::annotation_parts`]. Frame ids are
/// `"<sentence>_f<n>"` where `n` counts the Negation frames already present,
/// so ids follow creation order and start at 0.
#[derive(Debug)]
pub struct FrameBuilder<'s> {
    sentence_id: &'s str,
    frames: &'s mut Vec<Frame>,
    splitwords: &'s mut Vec<SplitWord>,
}

impl<'s> FrameBuilder<'s> {
    pub(crate) fn new(
        sentence_id: &'s str,
        frames: &'s mut Vec<Frame>,
        splitwords: &'s mut Vec<SplitWord>,
    ) -> Self {
        Self {
            sentence_id,
            frames,
            splitwords,
        }
    }

    pub fn sentence_id(&self) -> &str {
        self.sentence_id
    }

    /// Number of Negation frames in the sentence so far.
    pub fn negation_frame_count(&self) -> usize {
        self.frames.iter().filter(|f| f.is_negation()).count()
    }

    /// Open a new Negation frame with the given target and return it for
    /// further attachments.
    pub fn open_frame(&mut self, target: FeNode) -> &mut Frame {
        let id = format!("{}_f{}", self.sentence_id, self.negation_frame_count());
        debug!("opening frame {} with target {}", id, target.idref);
        self.frames.push(Frame::new(id, target));
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Record a split of `terminal` into two parts.
    ///
    /// The first split of a terminal gets part ids `_s0`/`_s1`; further splits
    /// of the same terminal continue the numbering so ids stay unique.
    pub fn split_word(&mut self, terminal: &Terminal, first: &str, second: &str) -> SplitWordIds {
        let existing = self
            .splitwords
            .iter()
            .filter(|s| s.idref == terminal.id)
            .count();
        let ids = SplitWordIds {
            first: format!("{}_s{}", terminal.id, existing * 2),
            second: format!("{}_s{}", terminal.id, existing * 2 + 1),
        };
        debug!("splitting {} into {:?} + {:?}", terminal.id, first, second);
        self.splitwords.push(SplitWord {
            idref: terminal.id.clone(),
            parts: [
                SplitWordPart {
                    id: ids.first.clone(),
                    word: first.to_string(),
                },
                SplitWordPart {
                    id: ids.second.clone(),
                    word: second.to_string(),
                },
            ],
        });
        ids
    }
}
