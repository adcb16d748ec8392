// models/src/medical/symptoms.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

pub const MIN_PAIN: u8 = 0;
pub const MAX_PAIN: u8 = 10;

/// Bleeding reported by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bleeding {
    None,
    Mild,
    Heavy,
}

impl Bleeding {
    pub const ALL: [Bleeding; 3] = [Bleeding::None, Bleeding::Mild, Bleeding::Heavy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Bleeding::None => "none",
            Bleeding::Mild => "mild",
            Bleeding::Heavy => "heavy",
        }
    }
}

impl fmt::Display for Bleeding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bleeding {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Bleeding::None),
            "mild" => Ok(Bleeding::Mild),
            "heavy" => Ok(Bleeding::Heavy),
            _ => Err(ValidationError::UnknownBleeding(s.to_string())),
        }
    }
}

/// What to do with a pain value outside the 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PainPolicy {
    /// Pin the value to the nearest end of the scale.
    #[default]
    Clamp,
    /// Refuse the value with `ValidationError::PainOutOfRange`.
    Reject,
}

impl FromStr for PainPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Ok(PainPolicy::Clamp),
            "reject" => Ok(PainPolicy::Reject),
            _ => Err(ValidationError::UnknownPainPolicy(s.to_string())),
        }
    }
}

/// A pain score on the 0-10 scale. Holding one guarantees the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PainLevel(u8);

impl PainLevel {
    /// Builds a pain level, rejecting anything off the scale.
    pub fn new(value: i64) -> ValidationResult<Self> {
        Self::with_policy(value, PainPolicy::Reject)
    }

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_PAIN as i64, MAX_PAIN as i64) as u8)
    }

    pub fn with_policy(value: i64, policy: PainPolicy) -> ValidationResult<Self> {
        match policy {
            PainPolicy::Clamp => Ok(Self::clamped(value)),
            PainPolicy::Reject if (MIN_PAIN as i64..=MAX_PAIN as i64).contains(&value) => {
                Ok(Self(value as u8))
            }
            PainPolicy::Reject => Err(ValidationError::PainOutOfRange(value)),
        }
    }

    /// Accepts a JSON number. Fractions are always refused; the range is
    /// handled by `policy`.
    pub fn from_number(value: f64, policy: PainPolicy) -> ValidationResult<Self> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite("pain"));
        }
        if value.fract() != 0.0 {
            return Err(ValidationError::FractionalPain(value));
        }
        // Saturating cast; anything this large is off the scale either way.
        Self::with_policy(value as i64, policy)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PainLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_PAIN)
    }
}

/// Symptoms entered for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SymptomReport {
    pub pain: PainLevel,
    pub bleeding: Bleeding,
    pub swelling: bool,
}

impl SymptomReport {
    pub fn new(pain: PainLevel, bleeding: Bleeding, swelling: bool) -> Self {
        Self { pain, bleeding, swelling }
    }
}
