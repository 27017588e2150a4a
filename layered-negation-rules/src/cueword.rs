//! Whole-word cue rules.
//!
//! A cue word opens a frame targeting itself. Scope, Negated and Focus are
//! then found by scanning the cue's siblings outward; the POS and lemma
//! tables come from [`RuleConfig`]. Focus and Negated are first-match-wins.

use layered_negation::{FeNode, Frame, FrameBuilder, Role, Terminal, TerminalView};
use log::debug;

use crate::config::has;
use crate::RuleConfig;

/// The word prefix that triggered a cue frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueTrigger {
    /// "ni…": nicht, nichts, nie, niemand, nirgends
    Ni,
    Kein,
    Nein,
    /// Guess trigger for unknown "nie…" words
    Nie,
    /// Guess trigger for unknown "nic…" words
    Nic,
}

impl CueTrigger {
    pub fn prefix(&self) -> &'static str {
        match self {
            CueTrigger::Ni => "ni",
            CueTrigger::Kein => "kein",
            CueTrigger::Nein => "nein",
            CueTrigger::Nie => "nie",
            CueTrigger::Nic => "nic",
        }
    }
}

fn first_prefix(word: &str, triggers: &[CueTrigger]) -> Option<CueTrigger> {
    triggers.iter().copied().find(|t| word.starts_with(t.prefix()))
}

/// Trigger for a known cue word (lowercased).
pub fn detect(word: &str) -> Option<CueTrigger> {
    first_prefix(word, &[CueTrigger::Ni, CueTrigger::Kein, CueTrigger::Nein])
}

/// Trigger for a word missing from the cue list (lowercased).
pub fn guess(word: &str) -> Option<CueTrigger> {
    first_prefix(word, &[CueTrigger::Nie, CueTrigger::Nic])
}

/// Open a frame for `cue` and fill its roles. Returns the new frame id.
///
/// `word` is the lowercased surface form of `cue`.
pub fn apply(
    cue: &Terminal,
    word: &str,
    terminals: TerminalView<'_>,
    builder: &mut FrameBuilder<'_>,
    config: &RuleConfig,
) -> String {
    let frame = builder.open_frame(FeNode::new(cue.id.clone()));
    attach_scope(frame, cue, terminals, config);
    attach_negated(frame, cue, word, terminals, config);
    attach_focus(frame, cue, word, terminals, config);
    debug!(
        "cue {:?} on {}: {} scope, negated {:?}, focus {:?} -> {}",
        word,
        cue.id,
        frame.scope().len(),
        frame.negated().map(|n| n.idref.as_str()),
        frame.focus().map(|n| n.idref.as_str()),
        frame.id()
    );
    frame.id().to_string()
}

/// Left scope runs nearest-first up to a clause-start tag. Right scope runs
/// up to sentence-final punctuation or an end lemma; a comma ends it unless
/// the token after the comma continues the clause, in which case only the
/// comma is skipped.
pub fn attach_scope(
    frame: &mut Frame,
    cue: &Terminal,
    terminals: TerminalView<'_>,
    config: &RuleConfig,
) {
    for sibling in terminals.previous_siblings(cue.position) {
        if has(&config.scope_start_pos, &sibling.pos) {
            break;
        }
        frame.attach(Role::Scope, FeNode::new(sibling.id.clone()));
    }

    let mut right = terminals.next_siblings(cue.position).peekable();
    while let Some(sibling) = right.next() {
        if has(&config.scope_end_pos, &sibling.pos)
            || has(&config.scope_end_lemmas, &sibling.lemma)
        {
            break;
        }
        if has(&config.scope_breaking_pos, &sibling.pos) {
            match right.peek() {
                Some(after) if has(&config.scope_continue_pos, &after.pos) => continue,
                _ => break,
            }
        }
        frame.attach(Role::Scope, FeNode::new(sibling.id.clone()));
    }
}

/// Only "nicht" gets a Negated: the nearest predicate to the right, else to
/// the left.
pub fn attach_negated(
    frame: &mut Frame,
    cue: &Terminal,
    word: &str,
    terminals: TerminalView<'_>,
    config: &RuleConfig,
) {
    if word != "nicht" {
        return;
    }
    let is_negated = |t: &&Terminal| has(&config.nicht_negated_pos, &t.pos);
    let found = terminals
        .next_siblings(cue.position)
        .find(is_negated)
        .or_else(|| terminals.previous_siblings(cue.position).find(is_negated));
    if let Some(negated) = found {
        frame.attach(Role::Negated, FeNode::new(negated.id.clone()));
    }
}

/// Focus searches in order of precedence. The slot is set once, so a later
/// search only matters when every earlier one came up empty.
pub fn attach_focus(
    frame: &mut Frame,
    cue: &Terminal,
    word: &str,
    terminals: TerminalView<'_>,
    config: &RuleConfig,
) {
    let pos = cue.pos.as_str();
    let nicht_ptkneg = word == "nicht" && pos == "PTKNEG";
    let kein_piat = word.starts_with("kein") && pos == "PIAT";

    // Rightward: the "nicht" and "kein" tables, plus the general fallback
    // which "nein" never gets.
    let right = terminals.next_siblings(cue.position).find(|t| {
        (nicht_ptkneg && has(&config.nicht_focus_pos, &t.pos))
            || (word != "nein" && has(&config.focus_fallback_pos, &t.pos))
            || (kein_piat && has(&config.nicht_focus_pos, &t.pos))
    });
    if let Some(t) = right {
        frame.attach(Role::Focus, FeNode::new(t.id.clone()));
    }

    if word == "nichts" && has(&config.nichts_pos, pos) {
        let found = terminals
            .next_siblings(cue.position)
            .find(|t| has(&config.nichts_focus_pos, &t.pos));
        if let Some(t) = found {
            frame.attach(Role::Focus, FeNode::new(t.id.clone()));
        }
    }

    if word == "nicht" {
        if nicht_ptkneg {
            let found = terminals
                .previous_siblings(cue.position)
                .find(|t| has(&config.nicht_previous_focus_pos, &t.pos));
            if let Some(t) = found {
                frame.attach(Role::Focus, FeNode::new(t.id.clone()));
            }
        } else if terminals.previous_siblings(cue.position).next().is_some() {
            frame.attach(Role::Focus, FeNode::new(cue.id.clone()));
        }
    }

    if word == "nichts" && pos == "NN" {
        frame.attach(Role::Focus, FeNode::new(cue.id.clone()));
    }
}
