// models/src/medical/severity.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Level of care a wound calls for, ordered by urgency.
///
/// The derived `Ord` follows declaration order, so
/// `SelfCare < UrgentCare < EmergencyRoom < TraumaCenter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    SelfCare,
    UrgentCare,
    #[serde(rename = "ER")]
    EmergencyRoom,
    TraumaCenter,
}

/// Visual weight the front end gives a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Success,
    Warning,
    Destructive,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::SelfCare,
        SeverityTier::UrgentCare,
        SeverityTier::EmergencyRoom,
        SeverityTier::TraumaCenter,
    ];

    /// Wire name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            SeverityTier::SelfCare => "SelfCare",
            SeverityTier::UrgentCare => "UrgentCare",
            SeverityTier::EmergencyRoom => "ER",
            SeverityTier::TraumaCenter => "TraumaCenter",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SeverityTier::SelfCare => "Self Care",
            SeverityTier::UrgentCare => "Urgent Care",
            SeverityTier::EmergencyRoom => "Emergency Room",
            SeverityTier::TraumaCenter => "Trauma Center",
        }
    }

    pub const fn alert_level(self) -> AlertLevel {
        match self {
            SeverityTier::SelfCare => AlertLevel::Success,
            SeverityTier::UrgentCare => AlertLevel::Warning,
            SeverityTier::EmergencyRoom | SeverityTier::TraumaCenter => AlertLevel::Destructive,
        }
    }

    /// Whether the facility search is offered for this tier.
    pub const fn needs_facility(self) -> bool {
        !matches!(self, SeverityTier::SelfCare)
    }

    /// Exact-match lookup used for facility requests, where an unrecognized
    /// tier is not an error but disables the tier filter.
    pub fn parse_requested(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_requested(s).ok_or_else(|| ValidationError::UnknownTier(s.to_string()))
    }
}
