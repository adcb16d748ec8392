// models/src/medical/classification.rs

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// Output of a wound classifier. The label is free text; the severity engine
/// matches it by substring, so unknown labels are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(label: impl Into<String>, confidence: f64) -> ValidationResult<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::Empty("label"));
        }
        if !confidence.is_finite() {
            return Err(ValidationError::NonFinite("confidence"));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self { label, confidence })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_label_and_bad_confidence() {
        assert_eq!(ClassificationResult::new("  ", 0.9), Err(ValidationError::Empty("label")));
        assert_eq!(
            ClassificationResult::new("Burn", 1.2),
            Err(ValidationError::ConfidenceOutOfRange(1.2))
        );
        assert!(ClassificationResult::new("Burn", 0.82).is_ok());
    }
}
