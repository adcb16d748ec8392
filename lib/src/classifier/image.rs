// lib/src/classifier/image.rs

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::errors::{Result, TriageError};

/// Largest upload accepted, matching the HTTP body limit.
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Decodes an uploaded image given as base64, with or without a
/// `data:image/...;base64,` prefix.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(TriageError::InvalidInput("Image data is required".to_string()));
    }
    let encoded = if payload.starts_with("data:") {
        payload
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| TriageError::InvalidInput("Malformed data URL".to_string()))?
    } else {
        payload
    };
    let bytes = STANDARD.decode(encoded)?;
    if bytes.is_empty() {
        return Err(TriageError::InvalidInput("Image data is required".to_string()));
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(TriageError::InvalidInput(format!(
            "Image is {} bytes, the limit is {}",
            bytes.len(),
            MAX_IMAGE_BYTES
        )));
    }
    Ok(bytes)
}

/// Whether a file looks like an image the classifier accepts, judged by its
/// extension.
pub fn is_allowed_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
