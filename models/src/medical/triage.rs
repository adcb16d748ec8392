// models/src/medical/triage.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::medical::classification::ClassificationResult;
use crate::medical::facility::RankedFacility;
use crate::medical::severity::SeverityTier;

/// Tier plus the user-facing recommendation that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityAssessment {
    pub severity: SeverityTier,
    pub recommendation: String,
}

/// One complete pass through classification, severity and facility ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageOutcome {
    pub id: Uuid,
    pub assessed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<ClassificationResult>,
    pub wound_label: String,
    pub severity: SeverityTier,
    pub recommendation: String,
    pub facilities: Vec<RankedFacility>,
}

impl TriageOutcome {
    pub fn new(
        classification: Option<ClassificationResult>,
        wound_label: String,
        assessment: SeverityAssessment,
        facilities: Vec<RankedFacility>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            assessed_at: Utc::now(),
            classification,
            wound_label,
            severity: assessment.severity,
            recommendation: assessment.recommendation,
            facilities,
        }
    }
}
