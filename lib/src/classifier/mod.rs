// lib/src/classifier/mod.rs

//! Wound classification. The production model lives outside this crate; the
//! service talks to it through [`WoundClassifier`].

pub mod image;
pub mod stub;

use triage_models::ClassificationResult;

use crate::errors::Result;

pub use image::{decode_image_payload, is_allowed_image_path, ALLOWED_IMAGE_EXTENSIONS, MAX_IMAGE_BYTES};
pub use stub::{FixedLabelClassifier, RandomStubClassifier};

/// Wound types the stub classifier can report.
pub const WOUND_LABELS: [&str; 7] = [
    "Laceration",
    "Abrasion",
    "Burn",
    "Bruise",
    "Cut",
    "Stab Wound",
    "Ingrown Nail",
];

/// Turns raw image bytes into a wound label and a confidence.
pub trait WoundClassifier: Send + Sync {
    /// Short identifier reported by the health endpoint.
    fn name(&self) -> &str;

    /// Labels this classifier may return.
    fn labels(&self) -> Vec<String>;

    fn classify(&self, image: &[u8]) -> Result<ClassificationResult>;
}
