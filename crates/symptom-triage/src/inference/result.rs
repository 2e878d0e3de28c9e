use serde::{Deserialize, Serialize};

use crate::knowledge::Symptom;

pub const DISCLAIMER: &str = "IMPORTANTE: Este é um sistema para fins educacionais e NÃO substitui uma avaliação médica profissional. Em caso de dúvida, procure um serviço de saúde.";

/// Binary triage classification, driven only by red flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Routine,
    Emergency,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Routine => "rotina",
            Self::Emergency => "emergência",
        }
    }
}

/// One eligible rule with its rounded score and contribution trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredHypothesis {
    pub condition: String,
    pub score: f64,
    pub matched_symptoms: Vec<Symptom>,
    pub explanation: Vec<String>,
    pub advice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagAlert {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub reported_symptoms: Vec<Symptom>,
    pub suggestions: Vec<ScoredHypothesis>,
    pub alerts: Vec<RedFlagAlert>,
    pub urgency_level: UrgencyLevel,
    pub disclaimer: String,
}

impl InferenceResult {
    pub fn is_emergency(&self) -> bool {
        self.urgency_level == UrgencyLevel::Emergency
    }

    pub fn top_suggestion(&self) -> Option<&ScoredHypothesis> {
        self.suggestions.first()
    }
}
