//! Declarative knowledge base: diagnostic rules and red-flag definitions.
//!
//! The catalog is plain data. It is built once (the standard catalog or a JSON
//! document) and only ever read by the inference engine.

mod catalog;
pub mod domain;
mod standard;

pub use catalog::{CatalogError, KnowledgeCatalog};
pub use domain::{DiagnosticRule, Evidence, RedFlagRule, Symptom};
