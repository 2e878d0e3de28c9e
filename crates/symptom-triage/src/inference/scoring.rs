use std::collections::BTreeSet;

use super::result::ScoredHypothesis;
use crate::knowledge::{DiagnosticRule, Symptom};

/// Share of a negative weight credited when that symptom is absent.
pub const ABSENCE_BONUS_FACTOR: f64 = 0.5;

pub(crate) struct RuleScore {
    pub score: f64,
    pub matched: Vec<Symptom>,
    pub explanation: Vec<String>,
}

impl RuleScore {
    pub fn is_eligible(&self, rule: &DiagnosticRule) -> bool {
        self.matched.len() >= rule.min_matches as usize
    }

    pub fn into_hypothesis(self, rule: &DiagnosticRule) -> ScoredHypothesis {
        ScoredHypothesis {
            condition: rule.name.clone(),
            score: round_score(self.score),
            matched_symptoms: self.matched,
            explanation: self.explanation,
            advice: rule.advice.clone(),
        }
    }
}

pub(crate) fn score_rule(rule: &DiagnosticRule, facts: &BTreeSet<Symptom>) -> RuleScore {
    let mut score = rule.base_score;
    let mut matched = Vec::new();
    let mut explanation = vec![format!("base score: {:+.1}", rule.base_score)];

    for evidence in &rule.evidence {
        let symptom = evidence.symptom.as_str();

        if facts.contains(symptom) {
            score += evidence.weight;
            matched.push(evidence.symptom.clone());
            explanation.push(format!("'{symptom}': {:+.1}", evidence.weight));
        } else if evidence.weight < 0.0 {
            let bonus = -evidence.weight * ABSENCE_BONUS_FACTOR;
            score += bonus;
            explanation.push(format!("absence of '{symptom}': {bonus:+.1}"));
        }
    }

    RuleScore {
        score,
        matched,
        explanation,
    }
}

/// Stable descending sort; rules with equal scores stay in catalog order.
pub(crate) fn rank(mut hypotheses: Vec<ScoredHypothesis>, limit: usize) -> Vec<ScoredHypothesis> {
    hypotheses.sort_by(|left, right| right.score.total_cmp(&left.score));
    hypotheses.truncate(limit);
    hypotheses
}

/// Two-decimal rounding, half away from zero; `-0.0` comes out as `0.0`.
pub(crate) fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Evidence;

    fn facts(symptoms: &[&str]) -> BTreeSet<Symptom> {
        symptoms.iter().map(|symptom| Symptom::from(*symptom)).collect()
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_score(3.1000000000000005), 3.1);
        assert_eq!(round_score(-0.10000000000000003), -0.1);
        assert_eq!(round_score(2.345678), 2.35);
    }

    #[test]
    fn rounding_never_yields_negative_zero() {
        let noisy = 0.3 - 0.1 - 0.2;
        assert!(noisy < 0.0);

        let rounded = round_score(noisy);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
        assert!(round_score(-0.001).is_sign_positive());
    }

    #[test]
    fn positive_evidence_is_silent_when_absent() {
        let rule = DiagnosticRule::new("Gripe", vec![Evidence::new("febre", 1.8)])
            .with_base_score(0.2);

        let outcome = score_rule(&rule, &facts(&[]));

        assert_eq!(outcome.score, 0.2);
        assert!(outcome.matched.is_empty());
        assert_eq!(outcome.explanation, vec!["base score: +0.2".to_string()]);
        assert!(!outcome.is_eligible(&rule));
    }

    #[test]
    fn present_negative_evidence_subtracts_and_counts_as_match() {
        let rule = DiagnosticRule::new("Faringite", vec![Evidence::new("tosse", -0.8)]);

        let outcome = score_rule(&rule, &facts(&["tosse"]));

        assert_eq!(round_score(outcome.score), -0.8);
        assert_eq!(outcome.matched, vec![Symptom::from("tosse")]);
        assert_eq!(
            outcome.explanation,
            vec!["base score: +0.0".to_string(), "'tosse': -0.8".to_string()]
        );
        assert!(outcome.is_eligible(&rule));
    }

    #[test]
    fn rank_is_stable_for_equal_scores() {
        let hypothesis = |condition: &str, score: f64| ScoredHypothesis {
            condition: condition.to_string(),
            score,
            matched_symptoms: Vec::new(),
            explanation: Vec::new(),
            advice: String::new(),
        };

        let ranked = rank(
            vec![
                hypothesis("a", 1.0),
                hypothesis("b", 2.0),
                hypothesis("c", 1.0),
                hypothesis("d", 2.0),
            ],
            3,
        );

        let order: Vec<&str> = ranked.iter().map(|h| h.condition.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "a"]);
    }
}
