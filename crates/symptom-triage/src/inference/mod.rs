//! Forward-chaining inference over the knowledge catalog.
//!
//! `InferenceEngine::analyze` is a pure function of the catalog and the
//! reported symptoms: every rule is scored in catalog order, eligible rules are
//! ranked, and red flags are evaluated independently of the ranking.

mod red_flags;
mod result;
mod scoring;

#[cfg(test)]
mod tests;

pub use result::{InferenceResult, RedFlagAlert, ScoredHypothesis, UrgencyLevel, DISCLAIMER};
pub use scoring::ABSENCE_BONUS_FACTOR;

use std::collections::BTreeSet;

use tracing::debug;

use crate::knowledge::{KnowledgeCatalog, Symptom};
use red_flags::{triggered_alerts, urgency_for};
use scoring::{rank, score_rule};

/// Upper bound on ranked suggestions returned per analysis.
pub const MAX_SUGGESTIONS: usize = 5;

/// Stateless evaluator holding a read-only catalog.
#[derive(Debug, Clone, Default)]
pub struct InferenceEngine {
    catalog: KnowledgeCatalog,
}

impl InferenceEngine {
    pub fn new(catalog: KnowledgeCatalog) -> Self {
        Self { catalog }
    }

    pub fn standard() -> Self {
        Self::new(KnowledgeCatalog::standard())
    }

    pub fn catalog(&self) -> &KnowledgeCatalog {
        &self.catalog
    }

    pub fn analyze<I, S>(&self, reported_symptoms: I) -> InferenceResult
    where
        I: IntoIterator<Item = S>,
        S: Into<Symptom>,
    {
        let facts: BTreeSet<Symptom> = reported_symptoms.into_iter().map(Into::into).collect();

        let eligible: Vec<ScoredHypothesis> = self
            .catalog
            .rules()
            .iter()
            .filter_map(|rule| {
                let outcome = score_rule(rule, &facts);
                if outcome.is_eligible(rule) {
                    Some(outcome.into_hypothesis(rule))
                } else {
                    None
                }
            })
            .collect();
        let eligible_count = eligible.len();
        let suggestions = rank(eligible, MAX_SUGGESTIONS);

        let alerts = triggered_alerts(self.catalog.red_flags(), &facts);
        let urgency_level = urgency_for(&alerts);

        debug!(
            reported = facts.len(),
            unrecognized = facts
                .iter()
                .filter(|symptom| !self.catalog.recognizes(symptom.as_str()))
                .count(),
            eligible = eligible_count,
            alerts = alerts.len(),
            urgency = urgency_level.label(),
            "symptom analysis complete"
        );

        InferenceResult {
            reported_symptoms: facts.into_iter().collect(),
            suggestions,
            alerts,
            urgency_level,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}
