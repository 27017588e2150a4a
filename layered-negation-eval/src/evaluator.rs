//! Gold against predicted comparison.

use layered_negation::{Frame, Role, Sentence};
use log::{debug, warn};

use crate::{
    metrics, CorpusReport, EvalConfig, EvalError, EvalResult, EvaluationReport, MetricSet,
    RoleExtractor, ScoreAccumulator,
};

/// A named pair of gold and predicted sentence sequences, e.g. one chapter.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    pub name: &'a str,
    pub gold: &'a [Sentence],
    pub predicted: &'a [Sentence],
}

/// Scores predicted Negation frames against gold ones.
///
/// Sentences are paired in order and must be equally many. Within a
/// sentence, the n-th gold Negation frame is compared with the n-th
/// predicted one. A role is scored for a pair when either side carries it.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
    extractor: RoleExtractor,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            extractor: RoleExtractor::new(config.strict_references),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn evaluate(&self, gold: &[Sentence], predicted: &[Sentence]) -> EvalResult<EvaluationReport> {
        if gold.len() != predicted.len() {
            return Err(EvalError::CorpusMismatch {
                gold: gold.len(),
                predicted: predicted.len(),
            });
        }

        let mut scores = ScoreAccumulator::new();
        for (gold_sentence, predicted_sentence) in gold.iter().zip(predicted) {
            let sentence_scores = self.score_sentence(gold_sentence, predicted_sentence)?;
            scores.merge(&sentence_scores);
        }
        Ok(EvaluationReport::new(scores))
    }

    /// Evaluate each document on its own and aggregate the results. A
    /// mismatch in any document aborts the run.
    pub fn evaluate_documents(&self, documents: &[Document<'_>]) -> EvalResult<CorpusReport> {
        let mut reports = Vec::with_capacity(documents.len());
        for document in documents {
            let report = self
                .evaluate(document.gold, document.predicted)
                .map_err(|err| err.in_document(document.name))?;
            debug!("document {}: {} frame pairs", document.name, report.counts().paired_frames);
            reports.push((document.name.to_string(), report));
        }
        Ok(CorpusReport::new(reports))
    }

    fn score_sentence(&self, gold: &Sentence, predicted: &Sentence) -> EvalResult<ScoreAccumulator> {
        if gold.id() != predicted.id() {
            warn!("pairing gold sentence {} with predicted sentence {}", gold.id(), predicted.id());
        }

        let gold_frames: Vec<&Frame> = gold.negation_frames().collect();
        let predicted_frames: Vec<&Frame> = predicted.negation_frames().collect();

        let mut scores = ScoreAccumulator::new();
        scores.counts.sentences = 1;
        scores.counts.gold_frames = gold_frames.len();
        scores.counts.predicted_frames = predicted_frames.len();
        scores.counts.gold_scope_frames = gold_frames.iter().filter(|f| f.has_role(Role::Scope)).count();
        scores.counts.predicted_scope_frames = predicted_frames
            .iter()
            .filter(|f| f.has_role(Role::Scope))
            .count();

        for (gold_frame, predicted_frame) in gold_frames.iter().zip(&predicted_frames) {
            scores.counts.paired_frames += 1;
            for role in Role::ALL {
                if !gold_frame.has_role(role) && !predicted_frame.has_role(role) {
                    continue;
                }
                let gold_words = self.extractor.role_words(gold, gold_frame, role)?;
                let predicted_words = self.extractor.role_words(predicted, predicted_frame, role)?;
                let metrics = metrics::score_lists(gold_words, predicted_words, role == Role::Scope);
                scores.add(role, &metrics);
            }
        }

        let paired = scores.counts.paired_frames;
        for gold_frame in &gold_frames[paired..] {
            debug!("gold frame {} has no predicted partner", gold_frame.id());
            scores.counts.unpaired_gold_frames += 1;
            if self.config.count_unpaired_gold {
                for role in Role::ALL.into_iter().filter(|r| gold_frame.has_role(*r)) {
                    scores.add(role, &MetricSet::zero(role == Role::Scope));
                }
            }
        }
        for predicted_frame in &predicted_frames[paired..] {
            debug!("predicted frame {} has no gold partner", predicted_frame.id());
            scores.counts.unpaired_predicted_frames += 1;
        }

        Ok(scores)
    }
}
