use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::domain::{DiagnosticRule, RedFlagRule};
use super::standard::{standard_red_flags, standard_rules};

/// Validation errors raised while assembling a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("diagnostic rule '{0}' is defined more than once")]
    DuplicateRule(String),
    #[error("diagnostic rule '{rule}' lists symptom '{symptom}' more than once")]
    DuplicateEvidence { rule: String, symptom: String },
    #[error("diagnostic rule '{rule}' has a non-finite weight for '{symptom}'")]
    NonFiniteWeight { rule: String, symptom: String },
    #[error("diagnostic rule '{0}' has a non-finite base score")]
    NonFiniteBaseScore(String),
    #[error("red flag '{0}' does not require any symptom")]
    EmptyRedFlag(String),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    rules: Vec<DiagnosticRule>,
    #[serde(default)]
    red_flags: Vec<RedFlagRule>,
}

/// Read-only knowledge base handed to the inference engine. Both collections
/// keep the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnowledgeCatalog {
    rules: Vec<DiagnosticRule>,
    red_flags: Vec<RedFlagRule>,
}

impl KnowledgeCatalog {
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
            red_flags: standard_red_flags(),
        }
    }

    pub fn new(
        rules: Vec<DiagnosticRule>,
        red_flags: Vec<RedFlagRule>,
    ) -> Result<Self, CatalogError> {
        validate_rules(&rules)?;
        validate_red_flags(&red_flags)?;

        Ok(Self { rules, red_flags })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.rules, document.red_flags)
    }

    pub fn rules(&self) -> &[DiagnosticRule] {
        &self.rules
    }

    pub fn red_flags(&self) -> &[RedFlagRule] {
        &self.red_flags
    }

    pub fn rule(&self, name: &str) -> Option<&DiagnosticRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Whether any rule or red flag mentions the identifier.
    pub fn recognizes(&self, symptom: &str) -> bool {
        self.rules.iter().any(|rule| rule.references(symptom))
            || self.red_flags.iter().any(|flag| flag.references(symptom))
    }
}

impl Default for KnowledgeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_rules(rules: &[DiagnosticRule]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();

    for rule in rules {
        if !names.insert(rule.name.as_str()) {
            return Err(CatalogError::DuplicateRule(rule.name.clone()));
        }

        if !rule.base_score.is_finite() {
            return Err(CatalogError::NonFiniteBaseScore(rule.name.clone()));
        }

        let mut seen = HashSet::new();
        for evidence in &rule.evidence {
            if !seen.insert(evidence.symptom.as_str()) {
                return Err(CatalogError::DuplicateEvidence {
                    rule: rule.name.clone(),
                    symptom: evidence.symptom.to_string(),
                });
            }

            if !evidence.weight.is_finite() {
                return Err(CatalogError::NonFiniteWeight {
                    rule: rule.name.clone(),
                    symptom: evidence.symptom.to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate_red_flags(red_flags: &[RedFlagRule]) -> Result<(), CatalogError> {
    match red_flags
        .iter()
        .find(|flag| flag.required_symptoms.is_empty())
    {
        Some(flag) => Err(CatalogError::EmptyRedFlag(flag.name.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::domain::Evidence;
    use std::io::Cursor;

    #[test]
    fn standard_catalog_keeps_declared_order() {
        let catalog = KnowledgeCatalog::standard();

        let names: Vec<&str> = catalog.rules().iter().map(|rule| rule.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Resfriado Comum",
                "Gripe (Influenza)",
                "COVID-19 (Suspeita)",
                "Faringite/Amigdalite",
                "Rinite Alérgica",
                "Gastroenterite Aguda (Infecção Intestinal)",
                "Infecção Urinária (ITU)",
            ]
        );
        assert_eq!(catalog.red_flags().len(), 3);
        assert!(catalog.rules().iter().all(|rule| rule.min_matches == 1));
        assert!(KnowledgeCatalog::new(
            catalog.rules().to_vec(),
            catalog.red_flags().to_vec()
        )
        .is_ok());
    }

    #[test]
    fn pharyngitis_rule_carries_negative_evidence() {
        let catalog = KnowledgeCatalog::standard();
        let rule = catalog.rule("Faringite/Amigdalite").expect("rule present");

        let negatives: Vec<(&str, f64)> = rule
            .evidence
            .iter()
            .filter(|evidence| evidence.weight < 0.0)
            .map(|evidence| (evidence.symptom.as_str(), evidence.weight))
            .collect();
        assert_eq!(negatives, vec![("tosse", -0.8), ("coriza", -0.6)]);
        assert_eq!(rule.base_score, 0.4);
    }

    #[test]
    fn recognizes_symptoms_from_rules_and_red_flags() {
        let catalog = KnowledgeCatalog::standard();

        assert!(catalog.recognizes("coriza"));
        assert!(catalog.recognizes("rigidez_na_nuca"));
        assert!(catalog.recognizes("dor_no_peito"));
        assert!(!catalog.recognizes("erupcao_cutanea"));
        assert!(!catalog.recognizes("unknown"));
    }

    #[test]
    fn new_rejects_duplicate_rule_names() {
        let rules = vec![
            DiagnosticRule::new("Gripe", vec![Evidence::new("febre", 1.0)]),
            DiagnosticRule::new("Gripe", vec![Evidence::new("tosse", 1.0)]),
        ];

        match KnowledgeCatalog::new(rules, Vec::new()) {
            Err(CatalogError::DuplicateRule(name)) => assert_eq!(name, "Gripe"),
            other => panic!("expected duplicate rule error, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_repeated_evidence_symptoms() {
        let rules = vec![DiagnosticRule::new(
            "Gripe",
            vec![Evidence::new("febre", 1.0), Evidence::new("febre", 0.5)],
        )];

        match KnowledgeCatalog::new(rules, Vec::new()) {
            Err(CatalogError::DuplicateEvidence { rule, symptom }) => {
                assert_eq!(rule, "Gripe");
                assert_eq!(symptom, "febre");
            }
            other => panic!("expected duplicate evidence error, got {other:?}"),
        }
    }

    #[test]
    fn new_rejects_non_finite_weights() {
        let rules = vec![DiagnosticRule::new(
            "Gripe",
            vec![Evidence::new("febre", f64::NAN)],
        )];

        assert!(matches!(
            KnowledgeCatalog::new(rules, Vec::new()),
            Err(CatalogError::NonFiniteWeight { .. })
        ));

        let rules = vec![DiagnosticRule::new("Gripe", Vec::new()).with_base_score(f64::INFINITY)];
        assert!(matches!(
            KnowledgeCatalog::new(rules, Vec::new()),
            Err(CatalogError::NonFiniteBaseScore(_))
        ));
    }

    #[test]
    fn new_rejects_red_flags_without_symptoms() {
        let flags = vec![RedFlagRule::new("Vazio", Vec::<&str>::new(), "sem sintomas")];

        match KnowledgeCatalog::new(Vec::new(), flags) {
            Err(CatalogError::EmptyRedFlag(name)) => assert_eq!(name, "Vazio"),
            other => panic!("expected empty red flag error, got {other:?}"),
        }
    }

    #[test]
    fn from_reader_applies_defaults_and_keeps_evidence_order() {
        let json = r#"{
            "rules": [
                {
                    "name": "Faringite",
                    "evidence": [
                        {"symptom": "dor_de_garganta", "weight": 2.0},
                        {"symptom": "tosse", "weight": -0.8},
                        {"symptom": "febre", "weight": 1.0}
                    ]
                }
            ]
        }"#;

        let catalog = KnowledgeCatalog::from_reader(Cursor::new(json)).expect("catalog parses");
        let rule = &catalog.rules()[0];

        assert_eq!(rule.base_score, 0.0);
        assert_eq!(rule.advice, "");
        assert_eq!(rule.min_matches, 1);
        let order: Vec<&str> = rule
            .evidence
            .iter()
            .map(|evidence| evidence.symptom.as_str())
            .collect();
        assert_eq!(order, vec!["dor_de_garganta", "tosse", "febre"]);
        assert!(catalog.red_flags().is_empty());
    }

    #[test]
    fn from_reader_validates_parsed_documents() {
        let json = r#"{
            "rules": [],
            "red_flags": [{"name": "Vazio", "required_symptoms": [], "message": "x"}]
        }"#;

        assert!(matches!(
            KnowledgeCatalog::from_reader(Cursor::new(json)),
            Err(CatalogError::EmptyRedFlag(_))
        ));
        assert!(matches!(
            KnowledgeCatalog::from_reader(Cursor::new("{not json")),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn from_path_reports_missing_files() {
        let missing = std::env::temp_dir().join("symptom-triage-missing-catalog.json");
        let _ = std::fs::remove_file(&missing);

        assert!(matches!(
            KnowledgeCatalog::from_path(&missing),
            Err(CatalogError::Io(_))
        ));
    }
}
