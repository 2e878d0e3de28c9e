//! Rule-based symptom triage.
//!
//! A [`knowledge::KnowledgeCatalog`] holds weighted diagnostic rules and
//! red-flag combinations; [`inference::InferenceEngine`] scores reported
//! symptoms against it and returns ranked, explained suggestions together with
//! an urgency classification.

pub mod config;
pub mod error;
pub mod inference;
pub mod interview;
pub mod knowledge;
pub mod telemetry;

pub use inference::{InferenceEngine, InferenceResult, UrgencyLevel};
pub use knowledge::{KnowledgeCatalog, Symptom};
