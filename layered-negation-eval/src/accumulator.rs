use layered_negation::Role;
use serde::Serialize;

use crate::MetricSet;

/// Running sums for one role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RoleSums {
    /// Frame pairs scored for this role
    pub frames: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub jaccard: f64,
}

impl RoleSums {
    fn add(&mut self, metrics: &MetricSet) {
        debug_assert!([metrics.precision, metrics.recall, metrics.f1]
            .iter()
            .chain(metrics.jaccard.iter())
            .all(|m| (0.0..=1.0).contains(m)));
        self.frames += 1;
        self.precision += metrics.precision;
        self.recall += metrics.recall;
        self.f1 += metrics.f1;
        self.jaccard += metrics.jaccard.unwrap_or(0.0);
    }

    fn merge(&mut self, other: &RoleSums) {
        self.frames += other.frames;
        self.precision += other.precision;
        self.recall += other.recall;
        self.f1 += other.f1;
        self.jaccard += other.jaccard;
    }
}

/// Corpus counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub sentences: usize,
    pub gold_frames: usize,
    pub predicted_frames: usize,
    pub paired_frames: usize,
    pub unpaired_gold_frames: usize,
    pub unpaired_predicted_frames: usize,
    pub gold_scope_frames: usize,
    pub predicted_scope_frames: usize,
}

impl Counts {
    fn merge(&mut self, other: &Counts) {
        self.sentences += other.sentences;
        self.gold_frames += other.gold_frames;
        self.predicted_frames += other.predicted_frames;
        self.paired_frames += other.paired_frames;
        self.unpaired_gold_frames += other.unpaired_gold_frames;
        self.unpaired_predicted_frames += other.unpaired_predicted_frames;
        self.gold_scope_frames += other.gold_scope_frames;
        self.predicted_scope_frames += other.predicted_scope_frames;
    }
}

/// Per-role metric sums plus counters, updated once per frame pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreAccumulator {
    pub counts: Counts,
    target: RoleSums,
    focus: RoleSums,
    negated: RoleSums,
    scope: RoleSums,
}

impl ScoreAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, role: Role, metrics: &MetricSet) {
        self.role_mut(role).add(metrics);
    }

    pub fn role(&self, role: Role) -> &RoleSums {
        match role {
            Role::Target => &self.target,
            Role::Focus => &self.focus,
            Role::Negated => &self.negated,
            Role::Scope => &self.scope,
        }
    }

    fn role_mut(&mut self, role: Role) -> &mut RoleSums {
        match role {
            Role::Target => &mut self.target,
            Role::Focus => &mut self.focus,
            Role::Negated => &mut self.negated,
            Role::Scope => &mut self.scope,
        }
    }

    /// Fold another accumulator (e.g. one document) into this one.
    pub fn merge(&mut self, other: &ScoreAccumulator) {
        self.counts.merge(&other.counts);
        for role in Role::ALL {
            let sums = *other.role(role);
            self.role_mut(role).merge(&sums);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_merge() {
        let mut a = ScoreAccumulator::new();
        a.add(Role::Scope, &MetricSet { precision: 1.0, recall: 0.5, f1: 0.5, jaccard: Some(0.25) });
        a.counts.gold_frames = 1;

        let mut b = ScoreAccumulator::new();
        b.add(Role::Scope, &MetricSet::zero(true));
        b.add(Role::Target, &MetricSet { precision: 1.0, recall: 1.0, f1: 1.0, jaccard: None });
        b.counts.gold_frames = 2;

        a.merge(&b);
        assert_eq!(a.counts.gold_frames, 3);
        assert_eq!(a.role(Role::Scope).frames, 2);
        assert_eq!(a.role(Role::Scope).jaccard, 0.25);
        assert_eq!(a.role(Role::Target).frames, 1);
        assert_eq!(a.role(Role::Focus).frames, 0);
    }
}
