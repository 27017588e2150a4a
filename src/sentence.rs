//! Sentence graph: ordered terminals, nonterminal edges, splitwords and frames.
//!
//! Terminal order is the sibling order every window heuristic relies on. It is
//! fixed when the sentence is built; annotation only ever appends frames and
//! splitwords.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Frame, NegationError, NegationResult};

/// A leaf token of the sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    pub id: String,
    /// Surface form
    pub word: String,
    pub lemma: String,
    /// STTS part-of-speech tag
    pub pos: String,
    /// Index within the sentence, assigned by [`Sentence::new`] and on
    /// deserialization
    #[serde(skip)]
    pub position: usize,
}

impl Terminal {
    pub fn new(
        id: impl Into<String>,
        word: impl Into<String>,
        lemma: impl Into<String>,
        pos: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            lemma: lemma.into(),
            pos: pos.into(),
            position: 0,
        }
    }

    /// Lowercased surface form, the form every rule matches against.
    pub fn lower_word(&self) -> String {
        self.word.to_lowercase()
    }
}

/// A labelled edge from a nonterminal to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub idref: String,
    #[serde(default)]
    pub label: String,
}

impl Edge {
    pub fn new(idref: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            idref: idref.into(),
            label: label.into(),
        }
    }
}

/// An inner node of the syntax graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nonterminal {
    pub id: String,
    /// Phrase category (NP, VP, S, ...)
    #[serde(default)]
    pub cat: String,
    edges: Vec<Edge>,
}

impl Nonterminal {
    pub fn new(id: impl Into<String>, cat: impl Into<String>, edges: Vec<Edge>) -> Self {
        Self {
            id: id.into(),
            cat: cat.into(),
            edges,
        }
    }

    /// Child edges in document order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// A synthetic sub-token created when a splitword rule fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitWordPart {
    pub id: String,
    pub word: String,
}

/// A terminal split into two semantic parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitWord {
    /// Id of the split terminal
    pub idref: String,
    pub parts: [SplitWordPart; 2],
}

/// Any node a frame reference may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Terminal(&'a Terminal),
    SplitPart(&'a SplitWordPart),
    Nonterminal(&'a Nonterminal),
}

impl<'a> Node<'a> {
    pub fn id(&self) -> &'a str {
        match self {
            Node::Terminal(t) => &t.id,
            Node::SplitPart(p) => &p.id,
            Node::Nonterminal(n) => &n.id,
        }
    }

    /// Surface form of a leaf node; nonterminals have none.
    pub fn word(&self) -> Option<&'a str> {
        match self {
            Node::Terminal(t) => Some(&t.word),
            Node::SplitPart(p) => Some(&p.word),
            Node::Nonterminal(_) => None,
        }
    }
}

/// Read-only access to the ordered terminal sequence.
#[derive(Debug, Clone, Copy)]
pub struct TerminalView<'a> {
    terminals: &'a [Terminal],
}

impl<'a> TerminalView<'a> {
    pub fn new(terminals: &'a [Terminal]) -> Self {
        Self { terminals }
    }

    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a Terminal> {
        self.terminals.get(position)
    }

    pub fn by_id(&self, id: &str) -> Option<&'a Terminal> {
        self.terminals.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Terminal> {
        self.terminals.iter()
    }

    /// Terminals left of `position`, nearest first.
    pub fn previous_siblings(&self, position: usize) -> impl Iterator<Item = &'a Terminal> + 'a {
        let terminals: &'a [Terminal] = self.terminals;
        let end = position.min(terminals.len());
        terminals[..end].iter().rev()
    }

    /// Terminals right of `position`, nearest first.
    pub fn next_siblings(&self, position: usize) -> impl Iterator<Item = &'a Terminal> + 'a {
        let terminals: &'a [Terminal] = self.terminals;
        let start = (position + 1).min(terminals.len());
        terminals[start..].iter()
    }

    /// The terminal immediately right of `position`.
    pub fn next_sibling(&self, position: usize) -> Option<&'a Terminal> {
        self.terminals.get(position + 1)
    }
}

/// A sentence of the corpus with its syntax graph and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SentenceData")]
pub struct Sentence {
    id: String,
    terminals: Vec<Terminal>,
    #[serde(default)]
    nonterminals: Vec<Nonterminal>,
    #[serde(default)]
    splitwords: Vec<SplitWord>,
    #[serde(default)]
    frames: Vec<Frame>,
}

/// Serialized form of [`Sentence`]; terminal positions are not stored.
#[derive(Deserialize)]
struct SentenceData {
    id: String,
    terminals: Vec<Terminal>,
    #[serde(default)]
    nonterminals: Vec<Nonterminal>,
    #[serde(default)]
    splitwords: Vec<SplitWord>,
    #[serde(default)]
    frames: Vec<Frame>,
}

impl From<SentenceData> for Sentence {
    fn from(data: SentenceData) -> Self {
        Sentence {
            nonterminals: data.nonterminals,
            splitwords: data.splitwords,
            frames: data.frames,
            ..Sentence::new(data.id, data.terminals)
        }
    }
}

impl Sentence {
    /// Create a sentence; terminal positions are assigned from their order.
    pub fn new(id: impl Into<String>, terminals: Vec<Terminal>) -> Self {
        let terminals = terminals
            .into_iter()
            .enumerate()
            .map(|(position, terminal)| Terminal { position, ..terminal })
            .collect();
        Self {
            id: id.into(),
            terminals,
            nonterminals: Vec::new(),
            splitwords: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn with_nonterminals(mut self, nonterminals: Vec<Nonterminal>) -> Self {
        self.nonterminals = nonterminals;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn terminals(&self) -> TerminalView<'_> {
        TerminalView::new(&self.terminals)
    }

    pub fn terminal(&self, id: &str) -> Option<&Terminal> {
        self.terminals().by_id(id)
    }

    pub fn nonterminals(&self) -> &[Nonterminal] {
        &self.nonterminals
    }

    pub fn nonterminal(&self, id: &str) -> Option<&Nonterminal> {
        self.nonterminals.iter().find(|n| n.id == id)
    }

    pub fn splitwords(&self) -> &[SplitWord] {
        &self.splitwords
    }

    pub fn split_part(&self, id: &str) -> Option<&SplitWordPart> {
        self.splitwords
            .iter()
            .flat_map(|s| s.parts.iter())
            .find(|p| p.id == id)
    }

    /// The splitword a part belongs to.
    pub fn splitword_of_part(&self, part_id: &str) -> Option<&SplitWord> {
        self.splitwords
            .iter()
            .find(|s| s.parts.iter().any(|p| p.id == part_id))
    }

    /// Look a node up by id: terminals first, then splitword parts, then nonterminals.
    pub fn node(&self, id: &str) -> Option<Node<'_>> {
        if let Some(t) = self.terminal(id) {
            return Some(Node::Terminal(t));
        }
        if let Some(p) = self.split_part(id) {
            return Some(Node::SplitPart(p));
        }
        self.nonterminal(id).map(Node::Nonterminal)
    }

    pub fn previous_siblings(&self, position: usize) -> impl Iterator<Item = &Terminal> + '_ {
        TerminalView::new(&self.terminals).previous_siblings(position)
    }

    pub fn next_siblings(&self, position: usize) -> impl Iterator<Item = &Terminal> + '_ {
        TerminalView::new(&self.terminals).next_siblings(position)
    }

    /// All frames, in creation order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frames named `Negation`, in creation order.
    pub fn negation_frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        self.frames.iter().filter(|f| f.is_negation())
    }

    pub fn frame(&self, id: &str) -> Option<&Frame> {
        self.frames.iter().find(|f| f.id() == id)
    }

    /// Append an existing frame, e.g. one read from a gold corpus.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Append an existing splitword, e.g. one read from a gold corpus.
    pub fn push_splitword(&mut self, splitword: SplitWord) {
        self.splitwords.push(splitword);
    }

    /// Drop every Negation frame and every splitword, keeping other frames.
    ///
    /// Returns the number of frames removed.
    pub fn remove_negation_frames(&mut self) -> usize {
        let before = self.frames.len();
        self.frames.retain(|f| !f.is_negation());
        self.splitwords.clear();
        before - self.frames.len()
    }

    /// Check that no two nodes share an id.
    pub fn validate(&self) -> NegationResult<()> {
        let mut seen = HashSet::new();
        let ids = self
            .terminals
            .iter()
            .map(|t| t.id.as_str())
            .chain(self.splitwords.iter().flat_map(|s| s.parts.iter().map(|p| p.id.as_str())))
            .chain(self.nonterminals.iter().map(|n| n.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(NegationError::DuplicateNode {
                    sentence: self.id.clone(),
                    id: id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Split into the read-only terminal sequence and a builder over the
    /// annotation containers, so rules can scan siblings while adding frames.
    pub fn annotation_parts(&mut self) -> (TerminalView<'_>, crate::FrameBuilder<'_>) {
        let Sentence {
            id,
            terminals,
            splitwords,
            frames,
            ..
        } = self;
        (
            TerminalView::new(terminals),
            crate::FrameBuilder::new(id, frames, splitwords),
        )
    }
}
