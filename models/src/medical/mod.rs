// models/src/medical/mod.rs

pub mod classification;
pub mod facility;
pub mod severity;
pub mod symptoms;
pub mod triage;

pub use classification::ClassificationResult;
pub use facility::{Coordinate, Facility, RankedFacility};
pub use severity::{AlertLevel, SeverityTier};
pub use symptoms::{Bleeding, PainLevel, PainPolicy, SymptomReport, MAX_PAIN, MIN_PAIN};
pub use triage::{SeverityAssessment, TriageOutcome};
