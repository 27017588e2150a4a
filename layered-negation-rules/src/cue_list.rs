//! Known cue words.

use std::collections::{BTreeMap, BTreeSet};

use crate::{RulesError, RulesResult};

/// Lowercased cue words, each optionally paired with the POS tags it was
/// observed with.
///
/// The text form has one cue per line, either `word` or `word<TAB>POS`.
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueList {
    cues: BTreeMap<String, BTreeSet<String>>,
}

impl CueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(text: &str) -> RulesResult<Self> {
        let mut list = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t').map(str::trim);
            let word = fields.next().unwrap_or_default();
            let pos = fields.next().filter(|p| !p.is_empty());
            if fields.next().is_some() {
                return Err(RulesError::CueList {
                    line: idx + 1,
                    message: format!("expected `word` or `word<TAB>POS`, got {:?}", line),
                });
            }
            if word.is_empty() {
                return Err(RulesError::CueList {
                    line: idx + 1,
                    message: "missing cue word".to_string(),
                });
            }
            list.insert(word, pos);
        }
        Ok(list)
    }

    /// Add a cue; the word is lowercased.
    pub fn insert(&mut self, word: &str, pos: Option<&str>) {
        let tags = self.cues.entry(word.to_lowercase()).or_default();
        if let Some(pos) = pos {
            tags.insert(pos.to_string());
        }
    }

    /// Whether `word` (already lowercased) is a known cue.
    pub fn contains(&self, word: &str) -> bool {
        self.cues.contains_key(word)
    }

    /// POS tags recorded for a cue; empty when the list carries none.
    pub fn tags(&self, word: &str) -> impl Iterator<Item = &str> + '_ {
        self.cues
            .get(word)
            .into_iter()
            .flat_map(|tags| tags.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.cues.keys().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for CueList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word.as_ref(), None);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_tagged() {
        let list = CueList::parse(
            "# cue words\nnicht\tPTKNEG\nKein\n\n  zweifellos \nnicht\tADV\n",
        )
        .unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("kein"));
        assert!(list.contains("zweifellos"));
        assert!(!list.contains("Kein"));
        assert_eq!(list.tags("nicht").collect::<Vec<_>>(), vec!["ADV", "PTKNEG"]);
        assert_eq!(list.tags("kein").count(), 0);
    }

    #[test]
    fn test_parse_rejects_extra_columns() {
        let err = CueList::parse("nicht\n\nnie\tADV\textra\n").unwrap_err();
        match err {
            RulesError::CueList { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_iter_lowercases() {
        let list: CueList = ["Nicht", "NIE"].into_iter().collect();
        assert_eq!(list.words().collect::<Vec<_>>(), vec!["nicht", "nie"]);
    }
}
