use layered_negation::Terminal;

use crate::CueList;

/// How a terminal enters the rule sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CueClass {
    /// In the cue list: every splitword and cueword rule applies.
    Known(String),
    /// Not in the cue list: only the guess rules apply.
    Unknown(String),
    /// No letters to match against (punctuation, numbers).
    Ignored,
}

impl CueClass {
    /// The lowercased word the rules match against.
    pub fn word(&self) -> Option<&str> {
        match self {
            CueClass::Known(word) | CueClass::Unknown(word) => Some(word),
            CueClass::Ignored => None,
        }
    }
}

/// Sorts terminals into known cues and candidates for guessing.
#[derive(Debug, Clone)]
pub struct CueClassifier {
    cues: CueList,
}

impl CueClassifier {
    pub fn new(cues: CueList) -> Self {
        Self { cues }
    }

    pub fn cues(&self) -> &CueList {
        &self.cues
    }

    pub fn classify(&self, terminal: &Terminal) -> CueClass {
        let word = terminal.lower_word();
        if self.cues.contains(&word) {
            CueClass::Known(word)
        } else if word.chars().any(char::is_alphabetic) {
            CueClass::Unknown(word)
        } else {
            CueClass::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let classifier = CueClassifier::new(CueList::parse("nicht\nzweifellos\n–\n").unwrap());
        let t = |word: &str| Terminal::new("1_1", word, word, "X");

        assert_eq!(classifier.classify(&t("Nicht")), CueClass::Known("nicht".into()));
        assert_eq!(classifier.classify(&t("niemand")), CueClass::Unknown("niemand".into()));
        assert_eq!(classifier.classify(&t(",")), CueClass::Ignored);
        assert_eq!(classifier.classify(&t("1914")), CueClass::Ignored);
        assert_eq!(classifier.classify(&t("–")).word(), Some("–"));
    }
}
