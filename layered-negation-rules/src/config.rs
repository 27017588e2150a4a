//! Rule tables.
//!
//! Every POS-tag and lemma set consulted by the splitword and cueword rules
//! lives in a [`RuleConfig`]. The built-in tables are available through
//! [`RuleConfig::standard`]; alternate tables can be loaded from TOML, where
//! any omitted table keeps its built-in value.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::RulesResult;

/// A set of STTS tags or lemmas.
pub type TagSet = BTreeSet<String>;

fn tags(items: &[&str]) -> TagSet {
    items.iter().map(|s| s.to_string()).collect()
}

static STANDARD: Lazy<RuleConfig> = Lazy::new(|| RuleConfig {
    splitword_pos: tags(&["ADJA", "ADJD", "NN", "VVFIN", "VVPP", "VVINF"]),
    guess_splitword_pos: tags(&["ADJA", "ADJD"]),
    scope_start_pos: tags(&["$*LRB*", "$,", "KON", "KOUS"]),
    scope_end_pos: tags(&["$.", "$*LRB*"]),
    scope_end_lemmas: tags(&["–", "und"]),
    scope_breaking_pos: tags(&["$,"]),
    scope_continue_pos: tags(&["KOUS", "ADV", "ART", "KOKOM", "APPR"]),
    focus_fallback_pos: tags(&["VMFIN", "VVFIN", "VVPP"]),
    nicht_focus_pos: tags(&[
        "PIS", "VVPP", "ADJD", "ADV", "PPER", "VVINF", "ADJ", "ADJA", "VMFIN", "PPOSAT",
    ]),
    nicht_previous_focus_pos: tags(&["VAFIN"]),
    nicht_negated_pos: tags(&["VVPP", "VVIZU", "VVFIN", "VMFIN", "ART"]),
    nichts_pos: tags(&["PIAT", "PTKANT", "PIS"]),
    nichts_focus_pos: tags(&["NN", "PIS", "PPER"]),
});

/// POS-tag and lemma tables for the negation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// POS tags on which the "un" and "außerordentlich" splitword rules fire
    pub splitword_pos: TagSet,
    /// POS tags on which an unknown "un" word is guessed to be a splitword
    pub guess_splitword_pos: TagSet,
    /// Left scope stops before a sibling with one of these tags
    pub scope_start_pos: TagSet,
    /// Right scope stops before a sibling with one of these tags
    pub scope_end_pos: TagSet,
    /// Right scope stops before a sibling with one of these lemmas
    pub scope_end_lemmas: TagSet,
    /// Punctuation that ends right scope unless the sibling after it continues
    pub scope_breaking_pos: TagSet,
    /// Tags that let right scope continue past breaking punctuation
    pub scope_continue_pos: TagSet,
    /// Rightward focus for every cue except "nein"
    pub focus_fallback_pos: TagSet,
    /// Rightward focus for "nicht"/PTKNEG and "kein…"/PIAT
    pub nicht_focus_pos: TagSet,
    /// Leftward focus for "nicht"/PTKNEG
    pub nicht_previous_focus_pos: TagSet,
    /// Negated search for "nicht", rightward then leftward
    pub nicht_negated_pos: TagSet,
    /// Tags of "nichts" that trigger the rightward focus search
    pub nichts_pos: TagSet,
    /// Rightward focus for "nichts" tagged with one of [`nichts_pos`](Self::nichts_pos)
    pub nichts_focus_pos: TagSet,
}

impl RuleConfig {
    /// The built-in tables.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Shared reference to the built-in tables.
    pub fn standard_ref() -> &'static RuleConfig {
        &STANDARD
    }

    /// Load tables from TOML. Omitted tables keep their built-in values.
    ///
    /// ```toml
    /// scope_end_lemmas = ["–", "und", "oder"]
    /// ```
    pub fn from_toml_str(source: &str) -> RulesResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn has(set: &TagSet, value: &str) -> bool {
    set.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RulesError;

    #[test]
    fn test_standard_tables() {
        let config = RuleConfig::standard();
        assert!(has(&config.scope_start_pos, "KON"));
        assert!(has(&config.scope_end_lemmas, "–"));
        assert_eq!(config.nicht_focus_pos.len(), 10);
        assert_eq!(&config, RuleConfig::standard_ref());
    }

    #[test]
    fn test_partial_toml_keeps_other_tables() {
        let config = RuleConfig::from_toml_str(
            r#"
            scope_end_lemmas = ["–", "und", "oder"]
            "#,
        )
        .unwrap();
        assert!(has(&config.scope_end_lemmas, "oder"));
        assert_eq!(config.scope_start_pos, RuleConfig::standard().scope_start_pos);
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let err = RuleConfig::from_toml_str("scope_middle_pos = [\"X\"]").unwrap_err();
        assert!(matches!(err, RulesError::Config(_)));
    }

    #[test]
    fn test_toml_round_trip_of_standard() {
        let text = RuleConfig::standard().to_toml_string().unwrap();
        assert_eq!(RuleConfig::from_toml_str(&text).unwrap(), RuleConfig::standard());
    }
}
