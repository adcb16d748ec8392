// rest_api/src/payloads.rs

//! Request bodies accepted by the JSON routes and their conversion into
//! domain values.

use serde::Deserialize;
use triage_lib::{decode_image_payload, TriageRequest};
use triage_models::{Bleeding, Coordinate, PainLevel, PainPolicy, SeverityTier, SymptomReport};

use crate::RestApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityRequest {
    pub wound_label: String,
    pub pain: f64,
    pub bleeding: String,
    pub swelling: bool,
}

impl SeverityRequest {
    pub fn symptoms(&self, policy: PainPolicy) -> Result<SymptomReport, RestApiError> {
        symptom_report(self.pain, &self.bleeding, self.swelling, policy)
    }
}

#[derive(Debug, Deserialize)]
pub struct FacilitiesRequest {
    #[serde(rename = "type")]
    pub tier: String,
    pub lat: f64,
    pub lng: f64,
}

impl FacilitiesRequest {
    /// Anything but an exact tier name disables the tier filter instead of
    /// failing.
    pub fn requested_tier(&self) -> Option<SeverityTier> {
        SeverityTier::parse_requested(&self.tier)
    }

    pub fn origin(&self) -> Result<Coordinate, RestApiError> {
        Ok(Coordinate::new(self.lat, self.lng)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub image: Option<String>,
}

impl ClassifyRequest {
    pub fn image_bytes(&self) -> Result<Vec<u8>, RestApiError> {
        Ok(decode_image_payload(self.image.as_deref().unwrap_or_default())?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageBody {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub wound_label: Option<String>,
    pub pain: f64,
    pub bleeding: String,
    pub swelling: bool,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl TriageBody {
    pub fn into_request(self, policy: PainPolicy) -> Result<TriageRequest, RestApiError> {
        let symptoms = symptom_report(self.pain, &self.bleeding, self.swelling, policy)?;
        let origin = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)?),
            (None, None) => None,
            _ => {
                return Err(RestApiError::InvalidInput(
                    "lat and lng must be given together".to_string(),
                ))
            }
        };
        // A label makes the image irrelevant, so don't decode it.
        let has_label = self.wound_label.as_deref().is_some_and(|l| !l.trim().is_empty());
        let image = match self.image {
            Some(payload) if !has_label => Some(decode_image_payload(&payload)?),
            _ => None,
        };
        Ok(TriageRequest { image, wound_label: self.wound_label, symptoms, origin })
    }
}

fn symptom_report(
    pain: f64,
    bleeding: &str,
    swelling: bool,
    policy: PainPolicy,
) -> Result<SymptomReport, RestApiError> {
    let pain = PainLevel::from_number(pain, policy)?;
    let bleeding: Bleeding = bleeding.parse()?;
    Ok(SymptomReport::new(pain, bleeding, swelling))
}
