// models/src/medical/facility.rs

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::medical::severity::SeverityTier;

/// A WGS-84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> ValidationResult<Self> {
        if !lat.is_finite() {
            return Err(ValidationError::NonFinite("lat"));
        }
        if !lng.is_finite() {
            return Err(ValidationError::NonFinite("lng"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

/// A care facility in the registry, tagged with the tier of care it provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    #[serde(rename = "type")]
    pub tier: SeverityTier,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Facility {
    pub fn location(&self) -> Coordinate {
        Coordinate { lat: self.lat, lng: self.lng }
    }

    /// Checks the registry record before it is accepted.
    pub fn validate(&self) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty("facility name"));
        }
        Coordinate::new(self.lat, self.lng).map(|_| ())
    }
}

/// A facility with its great-circle distance, in miles, from the requester.
/// Serializes flat: the facility fields followed by `distance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFacility {
    #[serde(flatten)]
    pub facility: Facility,
    pub distance: f64,
}

impl RankedFacility {
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.facility.lat, self.facility.lng
        )
    }

    pub fn directions_url(&self, origin: Coordinate) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}",
            origin.lat, origin.lng, self.facility.lat, self.facility.lng
        )
    }
}
