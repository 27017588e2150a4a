//! Per-frame metrics over word lists.
//!
//! Word lists are sorted and padded to equal length with empty strings,
//! then binarized against the gold list. Precision, recall and F1 are
//! support-weighted averages over the labels present in either vector; a
//! label with no predictions or no gold support scores 0.

use std::collections::BTreeSet;

use serde::Serialize;

/// Precision, recall and F1 for one frame and role, plus Jaccard for Scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSet {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub jaccard: Option<f64>,
}

impl MetricSet {
    /// All zero; the contribution of a gold frame nothing was predicted for.
    pub fn zero(with_jaccard: bool) -> Self {
        Self {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
            jaccard: with_jaccard.then(|| 0.0),
        }
    }
}

/// Support-weighted precision, recall and F1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedScores {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Append `""` to the shorter list until both have the same length.
pub fn pad_to_equal_length(gold: &mut Vec<String>, test: &mut Vec<String>) {
    let len = gold.len().max(test.len());
    gold.resize(len, String::new());
    test.resize(len, String::new());
}

/// Gold positions are 1 iff the word is non-empty; test positions are 1 iff
/// the word occurs in `gold`, padding included.
///
/// Used for Target, Focus and Negated. An empty gold word against an empty
/// test word scores 0.
pub fn binarize(gold: &[String], test: &[String]) -> (Vec<u8>, Vec<u8>) {
    binarize_against(gold, test, gold.iter().map(String::as_str).collect())
}

/// As [`binarize`], but test positions are 1 only for non-empty members of
/// `gold`, so padding never matches. Used for Scope.
pub fn binarize_scope(gold: &[String], test: &[String]) -> (Vec<u8>, Vec<u8>) {
    let vocabulary = gold
        .iter()
        .map(String::as_str)
        .filter(|w| !w.is_empty())
        .collect();
    binarize_against(gold, test, vocabulary)
}

fn binarize_against(
    gold: &[String],
    test: &[String],
    vocabulary: BTreeSet<&str>,
) -> (Vec<u8>, Vec<u8>) {
    let gold_bits = gold.iter().map(|w| u8::from(!w.is_empty())).collect();
    let test_bits = test
        .iter()
        .map(|w| u8::from(vocabulary.contains(w.as_str())))
        .collect();
    (gold_bits, test_bits)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Weighted precision, recall and F1 of `test` against `gold`.
///
/// Both vectors must have equal length; the labels scored are those present
/// in either one, each weighted by its count in `gold`.
pub fn weighted_scores(gold: &[u8], test: &[u8]) -> WeightedScores {
    debug_assert_eq!(gold.len(), test.len());
    let labels: BTreeSet<u8> = gold.iter().chain(test.iter()).copied().collect();

    let mut precision = 0.0;
    let mut recall = 0.0;
    let mut f1 = 0.0;
    let mut total_support = 0;
    for label in labels {
        let support = gold.iter().filter(|&&g| g == label).count();
        let predicted = test.iter().filter(|&&t| t == label).count();
        let hits = gold
            .iter()
            .zip(test)
            .filter(|&(&g, &t)| g == label && t == label)
            .count();

        let p = ratio(hits, predicted);
        let r = ratio(hits, support);
        let f = if p + r == 0.0 { 0.0 } else { 2.0 * p * r / (p + r) };

        precision += p * support as f64;
        recall += r * support as f64;
        f1 += f * support as f64;
        total_support += support;
    }

    if total_support == 0 {
        return WeightedScores {
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        };
    }
    let total = total_support as f64;
    WeightedScores {
        precision: precision / total,
        recall: recall / total,
        f1: f1 / total,
    }
}

/// |G ∩ T| / |G ∪ T| over the distinct non-empty words. Two empty sets are
/// identical and score 1.
pub fn jaccard(gold: &[String], test: &[String]) -> f64 {
    let gold: BTreeSet<&str> = gold.iter().map(String::as_str).filter(|w| !w.is_empty()).collect();
    let test: BTreeSet<&str> = test.iter().map(String::as_str).filter(|w| !w.is_empty()).collect();
    let union = gold.union(&test).count();
    if union == 0 {
        return 1.0;
    }
    gold.intersection(&test).count() as f64 / union as f64
}

/// Sort, pad, binarize and score one role of one frame pair. `scope`
/// selects Scope binarization and adds Jaccard.
pub fn score_lists(mut gold: Vec<String>, mut test: Vec<String>, scope: bool) -> MetricSet {
    gold.sort();
    test.sort();
    pad_to_equal_length(&mut gold, &mut test);
    let (gold_bits, test_bits) = if scope {
        binarize_scope(&gold, &test)
    } else {
        binarize(&gold, &test)
    };
    let scores = weighted_scores(&gold_bits, &test_bits);
    MetricSet {
        precision: scores.precision,
        recall: scores.recall,
        f1: scores.f1,
        jaccard: scope.then(|| jaccard(&gold, &test)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pad_shorter_side() {
        let mut gold = words(&["a", "b", "c"]);
        let mut test = Vec::new();
        pad_to_equal_length(&mut gold, &mut test);
        assert_eq!(test, words(&["", "", ""]));

        let mut gold = words(&[""]);
        let mut test = words(&["x", "y"]);
        pad_to_equal_length(&mut gold, &mut test);
        assert_eq!(gold, words(&["", ""]));
    }

    #[test]
    fn test_binarize_scope_uses_gold_membership() {
        let (g, t) = binarize_scope(&words(&["er", "kommt", ""]), &words(&["", "kommt", "sie"]));
        assert_eq!(g, vec![1, 1, 0]);
        assert_eq!(t, vec![0, 1, 0]);
    }

    #[test]
    fn test_scope_padding_never_matches() {
        let (g, t) = binarize_scope(&words(&[""]), &words(&[""]));
        assert_eq!(g, vec![0]);
        assert_eq!(t, vec![0]);
    }

    #[test]
    fn test_single_role_empty_gold_matches_empty_test() {
        let (g, t) = binarize(&words(&[""]), &words(&[""]));
        assert_eq!(g, vec![0]);
        assert_eq!(t, vec![1]);

        let (g, t) = binarize(&words(&["nicht"]), &words(&["nicht"]));
        assert_eq!((g, t), (vec![1], vec![1]));
        let (g, t) = binarize(&words(&[""]), &words(&["kommt"]));
        assert_eq!((g, t), (vec![0], vec![0]));
    }

    #[test]
    fn test_score_lists_empty_single_role_on_both_sides_scores_zero() {
        let m = score_lists(words(&[""]), words(&[""]), false);
        assert_eq!(m, MetricSet::zero(false));
    }

    #[test]
    fn test_weighted_scores_perfect_and_miss() {
        let perfect = weighted_scores(&[1, 1, 1], &[1, 1, 1]);
        assert_eq!(perfect, WeightedScores { precision: 1.0, recall: 1.0, f1: 1.0 });

        let miss = weighted_scores(&[1, 1, 1], &[0, 0, 0]);
        assert_eq!(miss, WeightedScores { precision: 0.0, recall: 0.0, f1: 0.0 });
    }

    #[test]
    fn test_weighted_scores_mixed() {
        // label 1: p = 1/1, r = 1/2, f = 2/3, support 2
        // label 0: p = 1/2, r = 1/1, f = 2/3, support 1
        let s = weighted_scores(&[1, 1, 0], &[1, 0, 0]);
        assert!(close(s.precision, (2.0 * 1.0 + 0.5) / 3.0));
        assert!(close(s.recall, (2.0 * 0.5 + 1.0) / 3.0));
        assert!(close(s.f1, 2.0 / 3.0));
    }

    #[test]
    fn test_jaccard() {
        assert!(close(jaccard(&words(&["a", "b"]), &words(&["b", "c"])), 1.0 / 3.0));
        assert!(close(jaccard(&words(&["a", "b", "c"]), &words(&["", "", ""])), 0.0));
        assert!(close(jaccard(&words(&["a", "a"]), &words(&["a"])), 1.0));
        assert!(close(jaccard(&words(&[""]), &words(&[""])), 1.0));
    }

    #[test]
    fn test_score_lists_empty_prediction_against_three_words() {
        let m = score_lists(words(&["ihn", "gesehen", "hat"]), Vec::new(), true);
        assert_eq!(m, MetricSet { precision: 0.0, recall: 0.0, f1: 0.0, jaccard: Some(0.0) });
    }

    #[test]
    fn test_score_lists_order_does_not_matter() {
        let m = score_lists(words(&["b", "a"]), words(&["a", "b"]), true);
        assert_eq!(m, MetricSet { precision: 1.0, recall: 1.0, f1: 1.0, jaccard: Some(1.0) });
    }
}
