//! Splitword rules.
//!
//! A splitword is a single token carrying a negation marker and a lexical
//! stem, like "un|erwartet" or "zweifel|los". Five rules are checked in
//! order and each fires independently, so one token can yield several
//! splits.
//!
//! Positions are counted in grapheme clusters.

use layered_negation::{FeNode, FrameBuilder, Role, Terminal};
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::has;
use crate::RuleConfig;

/// Which side of the split holds the negation marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSide {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitRule {
    /// "un…" with a splitword POS
    Un,
    /// "außerordentlich…" with a splitword POS, marker "außer"
    Ausserordentlich,
    /// "…los"
    Los,
    /// "…lose" or "…frei"
    LoseFrei,
    /// "…lose" plus one inflection letter ("…loser", "…losen", "…loses")
    LoseInflected,
}

impl SplitRule {
    pub const ALL: [SplitRule; 5] = [
        SplitRule::Un,
        SplitRule::Ausserordentlich,
        SplitRule::Los,
        SplitRule::LoseFrei,
        SplitRule::LoseInflected,
    ];

    /// Rule number, 1 to 5.
    pub fn number(&self) -> u8 {
        match self {
            SplitRule::Un => 1,
            SplitRule::Ausserordentlich => 2,
            SplitRule::Los => 3,
            SplitRule::LoseFrei => 4,
            SplitRule::LoseInflected => 5,
        }
    }

    pub fn marker_side(&self) -> MarkerSide {
        match self {
            SplitRule::Un | SplitRule::Ausserordentlich => MarkerSide::Prefix,
            SplitRule::Los | SplitRule::LoseFrei | SplitRule::LoseInflected => MarkerSide::Suffix,
        }
    }

    /// Grapheme index at which `word` splits, if the rule matches it.
    fn split_point(
        &self,
        word: &str,
        graphemes: &[&str],
        pos: &str,
        config: &RuleConfig,
    ) -> Option<usize> {
        let len = graphemes.len();
        let splitword_pos = has(&config.splitword_pos, pos);
        match self {
            SplitRule::Un => (word.starts_with("un") && splitword_pos).then(|| 2),
            SplitRule::Ausserordentlich => {
                (word.starts_with("außerordentlich") && splitword_pos).then(|| 5)
            }
            SplitRule::Los => word.ends_with("los").then(|| len.saturating_sub(3)),
            SplitRule::LoseFrei => {
                (word.ends_with("lose") || word.ends_with("frei")).then(|| len.saturating_sub(4))
            }
            SplitRule::LoseInflected => {
                (len >= 5 && graphemes[len - 5..len - 1].concat() == "lose").then(|| len - 5)
            }
        }
    }
}

/// A matched splitword: the lowercased token divided at the rule's split point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub rule: SplitRule,
    pub first: String,
    pub second: String,
}

impl Split {
    /// The negation marker part ("un", "außer", "los", ...).
    pub fn marker(&self) -> &str {
        match self.rule.marker_side() {
            MarkerSide::Prefix => &self.first,
            MarkerSide::Suffix => &self.second,
        }
    }

    /// The lexical stem part.
    pub fn stem(&self) -> &str {
        match self.rule.marker_side() {
            MarkerSide::Prefix => &self.second,
            MarkerSide::Suffix => &self.first,
        }
    }
}

fn split_with(rules: &[SplitRule], terminal: &Terminal, config: &RuleConfig) -> Vec<Split> {
    let word = terminal.lower_word();
    let graphemes: Vec<&str> = word.graphemes(true).collect();

    let mut splits = Vec::new();
    for rule in rules {
        let Some(at) = rule.split_point(&word, &graphemes, &terminal.pos, config) else {
            continue;
        };
        let split = Split {
            rule: *rule,
            first: graphemes[..at].concat(),
            second: graphemes[at..].concat(),
        };
        if split.stem().is_empty() || split.marker().is_empty() {
            continue;
        }
        splits.push(split);
    }
    splits
}

/// All splitword rules matching a known cue.
pub fn detect(terminal: &Terminal, config: &RuleConfig) -> Vec<Split> {
    split_with(&SplitRule::ALL, terminal, config)
}

/// Splitword guess for a token missing from the cue list: only the "un"
/// prefix, and only on the guess POS tags.
pub fn guess(terminal: &Terminal, config: &RuleConfig) -> Vec<Split> {
    if !has(&config.guess_splitword_pos, &terminal.pos) {
        return Vec::new();
    }
    split_with(&[SplitRule::Un], terminal, config)
}

/// Record `split` on the sentence and open its frame.
///
/// The marker part is the Target; Focus, Negated and Scope all reference
/// the stem part. Returns the new frame id.
pub fn apply(split: &Split, terminal: &Terminal, builder: &mut FrameBuilder<'_>) -> String {
    let ids = builder.split_word(terminal, &split.first, &split.second);
    let (marker_id, stem_id) = match split.rule.marker_side() {
        MarkerSide::Prefix => (ids.first, ids.second),
        MarkerSide::Suffix => (ids.second, ids.first),
    };

    let frame = builder.open_frame(FeNode::split(marker_id));
    frame.attach(Role::Focus, FeNode::split(stem_id.clone()));
    frame.attach(Role::Negated, FeNode::split(stem_id.clone()));
    frame.attach(Role::Scope, FeNode::split(stem_id));
    debug!(
        "splitword rule {} on {}: {} + {} -> {}",
        split.rule.number(),
        terminal.id,
        split.first,
        split.second,
        frame.id()
    );
    frame.id().to_string()
}
