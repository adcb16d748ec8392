// lib/src/classifier/stub.rs

use std::sync::Mutex;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use triage_models::ClassificationResult;

use crate::classifier::{WoundClassifier, WOUND_LABELS};
use crate::errors::{Result, TriageError};

/// Stand-in for a trained model: picks a label uniformly at random and
/// reports a confidence between 0.75 and 0.95. Seed it for reproducible
/// output.
#[derive(Debug)]
pub struct RandomStubClassifier {
    rng: Mutex<StdRng>,
}

impl RandomStubClassifier {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng: Mutex::new(rng) }
    }
}

impl WoundClassifier for RandomStubClassifier {
    fn name(&self) -> &str {
        "random-stub"
    }

    fn labels(&self) -> Vec<String> {
        WOUND_LABELS.iter().map(|label| label.to_string()).collect()
    }

    fn classify(&self, image: &[u8]) -> Result<ClassificationResult> {
        if image.is_empty() {
            return Err(TriageError::InvalidInput("Image data is required".to_string()));
        }
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| TriageError::Classifier("classifier state is poisoned".to_string()))?;
        let label = WOUND_LABELS[rng.gen_range(0..WOUND_LABELS.len())];
        let confidence = ((0.75 + rng.gen::<f64>() * 0.2) * 100.0).round() / 100.0;
        debug!("Stub classified {} bytes as {} ({:.2})", image.len(), label, confidence);
        Ok(ClassificationResult::new(label, confidence)?)
    }
}

/// Always answers with the same label. Useful when the label is already
/// known, and in tests.
#[derive(Debug, Clone)]
pub struct FixedLabelClassifier {
    result: ClassificationResult,
}

impl FixedLabelClassifier {
    pub fn new(label: impl Into<String>, confidence: f64) -> Result<Self> {
        Ok(Self { result: ClassificationResult::new(label, confidence)? })
    }
}

impl WoundClassifier for FixedLabelClassifier {
    fn name(&self) -> &str {
        "fixed-label"
    }

    fn labels(&self) -> Vec<String> {
        vec![self.result.label.clone()]
    }

    fn classify(&self, image: &[u8]) -> Result<ClassificationResult> {
        if image.is_empty() {
            return Err(TriageError::InvalidInput("Image data is required".to_string()));
        }
        Ok(self.result.clone())
    }
}
