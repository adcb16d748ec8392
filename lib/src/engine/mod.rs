// lib/src/engine/mod.rs

pub mod severity;

pub use severity::{assess_symptoms, classify_severity, select_rule, SeverityRule};
