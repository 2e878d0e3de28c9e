use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque symptom identifier drawn from the catalog vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symptom(String);

impl Symptom {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symptom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symptom {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Symptom {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for Symptom {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&Symptom> for Symptom {
    fn from(value: &Symptom) -> Self {
        value.clone()
    }
}

/// Signed weight attached to one symptom of a rule. Positive weights support
/// the condition when the symptom is present, negative weights argue against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub symptom: Symptom,
    pub weight: f64,
}

impl Evidence {
    pub fn new(symptom: impl Into<Symptom>, weight: f64) -> Self {
        Self {
            symptom: symptom.into(),
            weight,
        }
    }
}

fn default_min_matches() -> u32 {
    1
}

/// Candidate condition scored by weighted evidence accumulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRule {
    pub name: String,
    /// Iterated in declaration order; explanation output follows it.
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub base_score: f64,
    #[serde(default)]
    pub advice: String,
    /// Present symptoms required before the rule is surfaced.
    #[serde(default = "default_min_matches")]
    pub min_matches: u32,
}

impl DiagnosticRule {
    pub fn new(name: impl Into<String>, evidence: Vec<Evidence>) -> Self {
        Self {
            name: name.into(),
            evidence,
            base_score: 0.0,
            advice: String::new(),
            min_matches: default_min_matches(),
        }
    }

    pub fn with_base_score(mut self, base_score: f64) -> Self {
        self.base_score = base_score;
        self
    }

    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = advice.into();
        self
    }

    pub fn with_min_matches(mut self, min_matches: u32) -> Self {
        self.min_matches = min_matches;
        self
    }

    pub fn references(&self, symptom: &str) -> bool {
        self.evidence
            .iter()
            .any(|evidence| evidence.symptom.as_str() == symptom)
    }
}

/// Conjunction of symptoms that forces an emergency classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedFlagRule {
    pub name: String,
    pub required_symptoms: Vec<Symptom>,
    pub message: String,
}

impl RedFlagRule {
    pub fn new(
        name: impl Into<String>,
        required_symptoms: impl IntoIterator<Item = impl Into<Symptom>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            required_symptoms: required_symptoms.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    pub fn references(&self, symptom: &str) -> bool {
        self.required_symptoms
            .iter()
            .any(|required| required.as_str() == symptom)
    }
}
