// lib/src/triage.rs

//! Runs one assessment end to end: classify the image (unless the label is
//! already known), pick a severity tier, then rank nearby facilities for it.

use std::sync::Arc;

use log::info;
use triage_models::{
    ClassificationResult, Coordinate, RankedFacility, SeverityAssessment, SeverityTier,
    SymptomReport, TriageOutcome,
};

use crate::classifier::WoundClassifier;
use crate::engine::assess_symptoms;
use crate::errors::{Result, TriageError};
use crate::facilities::FacilityRegistry;

/// Input for a full triage pass. At least one of `image` and `wound_label`
/// must be present; an explicit label takes precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageRequest {
    pub image: Option<Vec<u8>>,
    pub wound_label: Option<String>,
    pub symptoms: SymptomReport,
    pub origin: Option<Coordinate>,
}

/// Shared, read-only handle on the registry and the classifier.
#[derive(Clone)]
pub struct TriageEngine {
    registry: Arc<FacilityRegistry>,
    classifier: Arc<dyn WoundClassifier>,
}

impl TriageEngine {
    pub fn new(registry: FacilityRegistry, classifier: Arc<dyn WoundClassifier>) -> Self {
        Self { registry: Arc::new(registry), classifier }
    }

    pub fn registry(&self) -> &FacilityRegistry {
        &self.registry
    }

    pub fn classifier(&self) -> &dyn WoundClassifier {
        self.classifier.as_ref()
    }

    pub fn classify(&self, image: &[u8]) -> Result<ClassificationResult> {
        self.classifier.classify(image)
    }

    pub fn assess(&self, label: &str, symptoms: &SymptomReport) -> SeverityAssessment {
        assess_symptoms(label, symptoms)
    }

    pub fn find_facilities(
        &self,
        requested: Option<SeverityTier>,
        origin: Coordinate,
    ) -> Vec<RankedFacility> {
        self.registry.rank(requested, origin)
    }

    pub fn run(&self, request: TriageRequest) -> Result<TriageOutcome> {
        let explicit_label = request
            .wound_label
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty());

        let (classification, label) = match (explicit_label, request.image) {
            (Some(label), _) => (None, label),
            (None, Some(image)) => {
                let result = self.classify(&image)?;
                let label = result.label.clone();
                (Some(result), label)
            }
            (None, None) => {
                return Err(TriageError::InvalidInput(
                    "either woundLabel or image is required".to_string(),
                ))
            }
        };

        let assessment = self.assess(&label, &request.symptoms);
        let facilities = match request.origin {
            Some(origin) if assessment.severity.needs_facility() => {
                self.find_facilities(Some(assessment.severity), origin)
            }
            _ => Vec::new(),
        };

        let outcome = TriageOutcome::new(classification, label, assessment, facilities);
        info!(
            "Triage {} -> {} ({} facilities)",
            outcome.id,
            outcome.severity,
            outcome.facilities.len()
        );
        Ok(outcome)
    }
}
