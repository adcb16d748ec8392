// lib/src/lib.rs

//! Decision core of the wound-triage service: the severity rule chain, the
//! facility ranker and its registry, the wound classifier, and the layered
//! service configuration.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod errors;
pub mod facilities;
pub mod triage;

pub use crate::classifier::{
    decode_image_payload, FixedLabelClassifier, RandomStubClassifier, WoundClassifier,
    WOUND_LABELS,
};
pub use crate::config::{build_engine, load_triage_config, TriageConfig};
pub use crate::engine::{assess_symptoms, classify_severity, select_rule, SeverityRule};
pub use crate::errors::{Result, TriageError};
pub use crate::facilities::{haversine_miles, rank_facilities, FacilityRegistry};
pub use crate::triage::{TriageEngine, TriageRequest};
