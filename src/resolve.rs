//! Flattening of frame references into the leaf words they dominate.
//!
//! A reference may name a terminal, a splitword part, or a nonterminal whose
//! edges lead (possibly through further nonterminals) to terminals. Resolution
//! keeps the nesting of the graph; [`flatten`] discards it when only
//! membership matters.

use crate::{NegationError, NegationResult, Node, Sentence, Terminal};

/// One resolved child: a leaf word or the words of a nested nonterminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Word(String),
    Group(Vec<Resolved>),
}

impl Resolved {
    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            Resolved::Word(word) => out.push(word.clone()),
            Resolved::Group(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }
}

/// Flatten nested resolution results into their words, preserving order.
pub fn flatten(items: &[Resolved]) -> Vec<String> {
    let mut out = Vec::new();
    for item in items {
        item.flatten_into(&mut out);
    }
    out
}

/// Resolves node ids against a sentence graph.
///
/// Guards against cycles with the set of nonterminals on the current path,
/// against runaway nesting with a depth cap and against shared-child blowup
/// with a budget of nonterminal visits per call. Each surfaces as
/// [`NegationError::UnresolvedReference`].
#[derive(Debug, Clone)]
pub struct GraphResolver {
    max_depth: usize,
    max_visits: usize,
}

/// Traversal state of a single resolution call.
#[derive(Default)]
struct Walk<'s> {
    path: Vec<&'s str>,
    visits: usize,
}

impl GraphResolver {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
    pub const DEFAULT_MAX_VISITS: usize = 10_000;

    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_visits: Self::DEFAULT_MAX_VISITS,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::new()
        }
    }

    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = max_visits;
        self
    }

    /// Resolve `id` to the ordered, nested words it dominates.
    ///
    /// A terminal or splitword part yields `[Word]`. A nonterminal yields one
    /// entry per edge, in edge order, with nested nonterminals as `Group`s.
    pub fn resolve(&self, id: &str, sentence: &Sentence) -> NegationResult<Vec<Resolved>> {
        let mut walk = Walk::default();
        match self.resolve_node(id, sentence, &mut walk, 0)? {
            Resolved::Group(children) => Ok(children),
            word => Ok(vec![word]),
        }
    }

    /// Resolve `id` to its flat word list.
    pub fn resolve_words(&self, id: &str, sentence: &Sentence) -> NegationResult<Vec<String>> {
        self.resolve(id, sentence).map(|items| flatten(&items))
    }

    /// Resolve `id` to the base terminals it covers. Splitword parts map to
    /// the terminal they were split from.
    pub fn resolve_terminals<'s>(
        &self,
        id: &str,
        sentence: &'s Sentence,
    ) -> NegationResult<Vec<&'s Terminal>> {
        let mut out = Vec::new();
        let mut walk = Walk::default();
        self.collect_terminals(id, sentence, &mut walk, 0, &mut out)?;
        Ok(out)
    }

    fn resolve_node<'s>(
        &self,
        id: &str,
        sentence: &'s Sentence,
        walk: &mut Walk<'s>,
        depth: usize,
    ) -> NegationResult<Resolved> {
        let node = sentence
            .node(id)
            .ok_or_else(|| NegationError::unresolved(id, "no such node"))?;

        let nonterminal = match node {
            Node::Terminal(t) => return Ok(Resolved::Word(t.word.clone())),
            Node::SplitPart(p) => return Ok(Resolved::Word(p.word.clone())),
            Node::Nonterminal(n) => n,
        };

        self.enter(&nonterminal.id, walk, depth)?;
        let mut children = Vec::with_capacity(nonterminal.edges().len());
        for edge in nonterminal.edges() {
            children.push(self.resolve_node(&edge.idref, sentence, walk, depth + 1)?);
        }
        walk.path.pop();

        Ok(Resolved::Group(children))
    }

    fn collect_terminals<'s>(
        &self,
        id: &str,
        sentence: &'s Sentence,
        walk: &mut Walk<'s>,
        depth: usize,
        out: &mut Vec<&'s Terminal>,
    ) -> NegationResult<()> {
        let node = sentence
            .node(id)
            .ok_or_else(|| NegationError::unresolved(id, "no such node"))?;

        match node {
            Node::Terminal(t) => out.push(t),
            Node::SplitPart(p) => {
                let terminal = sentence
                    .splitword_of_part(&p.id)
                    .and_then(|s| sentence.terminal(&s.idref))
                    .ok_or_else(|| NegationError::unresolved(id, "splitword of unknown terminal"))?;
                out.push(terminal);
            }
            Node::Nonterminal(n) => {
                self.enter(&n.id, walk, depth)?;
                for edge in n.edges() {
                    self.collect_terminals(&edge.idref, sentence, walk, depth + 1, out)?;
                }
                walk.path.pop();
            }
        }
        Ok(())
    }

    fn enter<'s>(&self, id: &'s str, walk: &mut Walk<'s>, depth: usize) -> NegationResult<()> {
        if walk.path.contains(&id) {
            return Err(NegationError::unresolved(
                id,
                format!("cycle through {}", walk.path.join(" -> ")),
            ));
        }
        if depth >= self.max_depth {
            return Err(NegationError::unresolved(
                id,
                format!("nesting deeper than {}", self.max_depth),
            ));
        }
        walk.visits += 1;
        if walk.visits > self.max_visits {
            return Err(NegationError::unresolved(
                id,
                format!("more than {} nonterminal visits", self.max_visits),
            ));
        }
        walk.path.push(id);
        Ok(())
    }
}

impl Default for GraphResolver {
    fn default() -> Self {
        Self::new()
    }
}
