// lib/src/facilities/registry.rs

use std::fs;
use std::path::Path;

use log::info;
use once_cell::sync::Lazy;
use serde::Deserialize;
use triage_models::{Coordinate, Facility, RankedFacility, SeverityTier};

use crate::errors::{Result, TriageError};
use crate::facilities::ranker::rank_facilities;

fn record(
    name: &str,
    tier: SeverityTier,
    lat: f64,
    lng: f64,
    address: &str,
    phone: &str,
) -> Facility {
    Facility {
        name: name.to_string(),
        tier,
        lat,
        lng,
        address: Some(address.to_string()),
        phone: Some(phone.to_string()),
    }
}

/// Philadelphia facilities served when no registry file is configured.
static BUILTIN_FACILITIES: Lazy<Vec<Facility>> = Lazy::new(|| {
    vec![
        record(
            "Penn Presbyterian Medical Center",
            SeverityTier::EmergencyRoom,
            39.9555,
            -75.1990,
            "51 N 39th St, Philadelphia, PA 19104",
            "(215) 662-8000",
        ),
        record(
            "Jefferson University Hospital",
            SeverityTier::TraumaCenter,
            39.9483,
            -75.1580,
            "111 S 11th St, Philadelphia, PA 19107",
            "(215) 955-6000",
        ),
        record(
            "Jefferson Urgent Care Center City",
            SeverityTier::UrgentCare,
            39.9520,
            -75.1620,
            "833 Chestnut St E, Philadelphia, PA 19107",
            "(215) 503-8000",
        ),
        record(
            "Temple University Hospital",
            SeverityTier::EmergencyRoom,
            39.9680,
            -75.1550,
            "3401 N Broad St, Philadelphia, PA 19140",
            "(215) 707-2000",
        ),
        record(
            "Patient First Urgent Care",
            SeverityTier::UrgentCare,
            39.9602,
            -75.1872,
            "3900 Chestnut St, Philadelphia, PA 19104",
            "(215) 387-3900",
        ),
        record(
            "CVS MinuteClinic",
            SeverityTier::SelfCare,
            39.9540,
            -75.1695,
            "1826 Chestnut St, Philadelphia, PA 19103",
            "(215) 564-3901",
        ),
        record(
            "Hospital of the University of Pennsylvania",
            SeverityTier::TraumaCenter,
            39.9495,
            -75.1955,
            "3400 Spruce St, Philadelphia, PA 19104",
            "(215) 662-4000",
        ),
        record(
            "Rothman Orthopaedic Institute Urgent Care",
            SeverityTier::UrgentCare,
            39.9485,
            -75.1625,
            "123 S 9th St, Philadelphia, PA 19107",
            "(267) 339-3500",
        ),
    ]
});

// Registry files wrap the list under a `facilities:` key.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    facilities: Vec<Facility>,
}

/// Static reference data the ranker searches. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRegistry {
    facilities: Vec<Facility>,
}

impl FacilityRegistry {
    pub fn new(facilities: Vec<Facility>) -> Result<Self> {
        for (idx, facility) in facilities.iter().enumerate() {
            facility.validate().map_err(|e| {
                TriageError::Registry(format!("facility #{} ('{}'): {}", idx + 1, facility.name, e))
            })?;
        }
        Ok(Self { facilities })
    }

    pub fn builtin() -> Self {
        Self { facilities: BUILTIN_FACILITIES.clone() }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: RegistryFile = serde_yaml2::from_str(content)
            .map_err(|e| TriageError::Registry(format!("Failed to parse YAML registry: {}", e)))?;
        Self::new(file.facilities)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(content)
            .map_err(|e| TriageError::Registry(format!("Failed to parse JSON registry: {}", e)))?;
        Self::new(file.facilities)
    }

    /// Loads a registry file, picking the format from the extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TriageError::Registry(format!("Failed to read registry file {}: {}", path.display(), e))
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let registry = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => {
                return Err(TriageError::Registry(format!(
                    "Unsupported registry file extension '{}' for {}",
                    other,
                    path.display()
                )))
            }
        };
        info!("Loaded {} facilities from {}", registry.len(), path.display());
        Ok(registry)
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn rank(&self, requested: Option<SeverityTier>, origin: Coordinate) -> Vec<RankedFacility> {
        rank_facilities(requested, origin, &self.facilities)
    }
}

impl Default for FacilityRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
