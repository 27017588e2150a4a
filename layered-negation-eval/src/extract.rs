//! Word extraction from frame roles.

use layered_negation::{FeNode, Frame, GraphResolver, NegationResult, Role, Sentence};
use log::warn;

/// Pulls the lowercased words a frame role covers out of its sentence.
///
/// In lenient mode an unresolved reference is logged and contributes an
/// empty word (single roles) or nothing (Scope). In strict mode it is an
/// error.
#[derive(Debug, Clone, Default)]
pub struct RoleExtractor {
    resolver: GraphResolver,
    strict: bool,
}

impl RoleExtractor {
    pub fn new(strict: bool) -> Self {
        Self {
            resolver: GraphResolver::new(),
            strict,
        }
    }

    fn words(&self, sentence: &Sentence, node: &FeNode) -> NegationResult<Option<Vec<String>>> {
        match self.resolver.resolve_words(&node.idref, sentence) {
            Ok(words) => Ok(Some(words.iter().map(|w| w.to_lowercase()).collect())),
            Err(err) if self.strict => Err(err),
            Err(err) => {
                warn!("sentence {}: {}", sentence.id(), err);
                Ok(None)
            }
        }
    }

    /// The word of a Target, Focus or Negated reference, `""` when the role
    /// is absent. A nonterminal yields its leaf words joined by a space.
    pub fn single_word(
        &self,
        sentence: &Sentence,
        frame: &Frame,
        role: Role,
    ) -> NegationResult<String> {
        let node = match role {
            Role::Target => Some(frame.target()),
            Role::Focus => frame.focus(),
            Role::Negated => frame.negated(),
            Role::Scope => frame.scope().first(),
        };
        let Some(node) = node else {
            return Ok(String::new());
        };
        Ok(self
            .words(sentence, node)?
            .map(|words| words.join(" "))
            .unwrap_or_default())
    }

    /// Every word covered by the Scope references, flattened.
    pub fn scope_words(&self, sentence: &Sentence, frame: &Frame) -> NegationResult<Vec<String>> {
        let mut out = Vec::new();
        for node in frame.scope() {
            if let Some(words) = self.words(sentence, node)? {
                out.extend(words);
            }
        }
        Ok(out)
    }

    /// The word list a role contributes to scoring: the resolved words, or
    /// a single `""` when the frame does not carry the role.
    pub fn role_words(
        &self,
        sentence: &Sentence,
        frame: &Frame,
        role: Role,
    ) -> NegationResult<Vec<String>> {
        if !frame.has_role(role) {
            return Ok(vec![String::new()]);
        }
        match role {
            Role::Scope => self.scope_words(sentence, frame),
            _ => Ok(vec![self.single_word(sentence, frame, role)?]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_negation::{Edge, NegationError, Nonterminal, Terminal};

    fn sentence() -> Sentence {
        let mut s = Sentence::new(
            "3",
            vec![
                Terminal::new("3_1", "Das", "die", "ART"),
                Terminal::new("3_2", "Haus", "Haus", "NN"),
                Terminal::new("3_3", "brennt", "brennen", "VVFIN"),
                Terminal::new("3_4", "nicht", "nicht", "PTKNEG"),
            ],
        )
        .with_nonterminals(vec![Nonterminal::new(
            "3_500",
            "NP",
            vec![Edge::new("3_1", "NK"), Edge::new("3_2", "NK")],
        )]);
        let mut frame = Frame::new("3_f0", FeNode::new("3_4"));
        frame.attach(Role::Focus, FeNode::new("3_500"));
        frame.attach(Role::Scope, FeNode::new("3_500"));
        frame.attach(Role::Scope, FeNode::new("3_404"));
        frame.attach(Role::Scope, FeNode::new("3_3"));
        s.push_frame(frame);
        s
    }

    #[test]
    fn test_single_words() {
        let s = sentence();
        let frame = &s.frames()[0];
        let extractor = RoleExtractor::default();
        assert_eq!(extractor.single_word(&s, frame, Role::Target).unwrap(), "nicht");
        assert_eq!(extractor.single_word(&s, frame, Role::Focus).unwrap(), "das haus");
        assert_eq!(extractor.single_word(&s, frame, Role::Negated).unwrap(), "");
        assert_eq!(extractor.role_words(&s, frame, Role::Negated).unwrap(), vec![""]);
    }

    #[test]
    fn test_scope_skips_unresolved_when_lenient() {
        let s = sentence();
        let words = RoleExtractor::new(false).scope_words(&s, &s.frames()[0]).unwrap();
        assert_eq!(words, vec!["das", "haus", "brennt"]);
    }

    #[test]
    fn test_strict_mode_reports_unresolved() {
        let s = sentence();
        let err = RoleExtractor::new(true).scope_words(&s, &s.frames()[0]).unwrap_err();
        assert!(matches!(err, NegationError::UnresolvedReference { ref id, .. } if id == "3_404"));
    }
}
