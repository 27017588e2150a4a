//! Corpus-level averages and their printed form.

use std::fmt;

use layered_negation::Role;
use serde::{Serialize, Serializer};

use crate::{Counts, ScoreAccumulator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Precision,
    Recall,
    F1,
    Jaccard,
}

/// A corpus average; `Undefined` when no frame was scored for the role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Average {
    Defined(f64),
    Undefined,
}

impl Average {
    fn of(sum: f64, count: usize) -> Self {
        if count == 0 {
            Average::Undefined
        } else {
            Average::Defined(sum / count as f64)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Average::Defined(v) => Some(*v),
            Average::Undefined => None,
        }
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Average::Defined(v) => write!(f, "{:.4}", v),
            Average::Undefined => f.write_str("undefined"),
        }
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Average::Defined(v) => serializer.serialize_f64(*v),
            Average::Undefined => serializer.serialize_str("undefined"),
        }
    }
}

/// Averages for one role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleReport {
    pub role: Role,
    pub frames: usize,
    pub precision: Average,
    pub recall: Average,
    pub f1: Average,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jaccard: Option<Average>,
}

/// The result of one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    scores: ScoreAccumulator,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    counts: &'a Counts,
    roles: Vec<RoleReport>,
}

impl EvaluationReport {
    pub fn new(scores: ScoreAccumulator) -> Self {
        Self { scores }
    }

    pub fn counts(&self) -> &Counts {
        &self.scores.counts
    }

    pub fn scores(&self) -> &ScoreAccumulator {
        &self.scores
    }

    /// Sum of `metric` over the scored frames of `role`, divided by their
    /// number. Jaccard is only defined for Scope.
    pub fn average(&self, role: Role, metric: Metric) -> Average {
        let sums = self.scores.role(role);
        let sum = match metric {
            Metric::Precision => sums.precision,
            Metric::Recall => sums.recall,
            Metric::F1 => sums.f1,
            Metric::Jaccard if role == Role::Scope => sums.jaccard,
            Metric::Jaccard => return Average::Undefined,
        };
        Average::of(sum, sums.frames)
    }

    pub fn role(&self, role: Role) -> RoleReport {
        RoleReport {
            role,
            frames: self.scores.role(role).frames,
            precision: self.average(role, Metric::Precision),
            recall: self.average(role, Metric::Recall),
            f1: self.average(role, Metric::F1),
            jaccard: (role == Role::Scope).then(|| self.average(role, Metric::Jaccard)),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for EvaluationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonReport {
            counts: self.counts(),
            roles: Role::ALL.iter().map(|r| self.role(*r)).collect(),
        }
        .serialize(serializer)
    }
}

fn section_title(role: Role) -> &'static str {
    match role {
        Role::Target => "CUEWORDS",
        Role::Focus => "FOCUS",
        Role::Negated => "NEGATED",
        Role::Scope => "SCOPE",
    }
}

const LABEL_WIDTH: usize = 27;

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self.counts();
        writeln!(f, "{:<w$}{}", "Sentences:", counts.sentences, w = LABEL_WIDTH)?;
        writeln!(f, "{:<w$}{}", "Negation gold frames:", counts.gold_frames, w = LABEL_WIDTH)?;
        writeln!(f, "{:<w$}{}", "Negation predicted frames:", counts.predicted_frames, w = LABEL_WIDTH)?;
        write!(f, "{:<w$}{}", "Paired frames:", counts.paired_frames, w = LABEL_WIDTH)?;

        for role in Role::ALL {
            let report = self.role(role);
            write!(f, "\n\n----- {} -----", section_title(role))?;
            if role == Role::Scope {
                write!(f, "\n{:<w$}{}", "Scope gold frames:", counts.gold_scope_frames, w = LABEL_WIDTH)?;
                write!(
                    f,
                    "\n{:<w$}{}",
                    "Scope predicted frames:",
                    counts.predicted_scope_frames,
                    w = LABEL_WIDTH
                )?;
            }
            write!(f, "\n{:<w$}{}", "Frames scored:", report.frames, w = LABEL_WIDTH)?;
            write!(f, "\n{:<w$}{}", "Precision:", report.precision, w = LABEL_WIDTH)?;
            write!(f, "\n{:<w$}{}", "Recall:", report.recall, w = LABEL_WIDTH)?;
            write!(f, "\n{:<w$}{}", "F1 score:", report.f1, w = LABEL_WIDTH)?;
            if let Some(jaccard) = report.jaccard {
                write!(f, "\n{:<w$}{}", "Jaccard similarity:", jaccard, w = LABEL_WIDTH)?;
            }
        }
        Ok(())
    }
}

/// Per-document reports plus their aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusReport {
    pub documents: Vec<(String, EvaluationReport)>,
    pub total: EvaluationReport,
}

impl CorpusReport {
    pub fn new(documents: Vec<(String, EvaluationReport)>) -> Self {
        let mut total = ScoreAccumulator::new();
        for (_, report) in &documents {
            total.merge(report.scores());
        }
        Self {
            documents,
            total: EvaluationReport::new(total),
        }
    }

    pub fn document(&self, name: &str) -> Option<&EvaluationReport> {
        self.documents
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, report)| report)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CorpusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, report) in &self.documents {
            writeln!(f, "====== EVALUATION for: {} ======", name)?;
            writeln!(f, "{}", report)?;
            writeln!(f)?;
        }
        writeln!(f, "====== TOTAL ======")?;
        write!(f, "{}", self.total)
    }
}
