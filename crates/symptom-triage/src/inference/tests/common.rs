use crate::inference::{InferenceEngine, InferenceResult, ScoredHypothesis};
use crate::knowledge::{DiagnosticRule, Evidence, KnowledgeCatalog, RedFlagRule};

pub(super) fn standard_engine() -> InferenceEngine {
    InferenceEngine::standard()
}

pub(super) fn analyze(symptoms: &[&str]) -> InferenceResult {
    standard_engine().analyze(symptoms.iter().copied())
}

pub(super) fn engine_with(rules: Vec<DiagnosticRule>, red_flags: Vec<RedFlagRule>) -> InferenceEngine {
    InferenceEngine::new(KnowledgeCatalog::new(rules, red_flags).expect("valid test catalog"))
}

/// Rule scoring exactly `score` when `symptom` is reported.
pub(super) fn flat_rule(name: &str, symptom: &str, score: f64) -> DiagnosticRule {
    DiagnosticRule::new(name, vec![Evidence::new(symptom, score)])
}

pub(super) fn conditions(result: &InferenceResult) -> Vec<&str> {
    result
        .suggestions
        .iter()
        .map(|hypothesis| hypothesis.condition.as_str())
        .collect()
}

pub(super) fn suggestion<'a>(result: &'a InferenceResult, condition: &str) -> &'a ScoredHypothesis {
    result
        .suggestions
        .iter()
        .find(|hypothesis| hypothesis.condition == condition)
        .unwrap_or_else(|| panic!("expected suggestion for {condition}"))
}
