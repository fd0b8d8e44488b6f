//! Image Recognition page backend.
//!
//! Decodes an uploaded JPEG/PNG and reports its dimensions together with a
//! hardcoded verdict. There is no classifier behind this — the verdict is a
//! placeholder and is labeled as such in the response.

use base64::Engine;
use image::GenericImageView;
use serde::Serialize;

/// Maximum upload size in bytes (4 MB).
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// The stubbed analysis result.
pub const PLACEHOLDER_VERDICT: &str = "Safe to consume!";

#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("Upload is empty")]
    EmptyUpload,
    #[error("Image exceeds {max} byte limit ({size} bytes)")]
    TooLarge { size: usize, max: usize },
    #[error("Unsupported image format; only JPEG and PNG are accepted")]
    UnsupportedFormat,
    #[error("Base64 decode failed: {0}")]
    InvalidEncoding(String),
    #[error("Image decode failed: {0}")]
    Decode(String),
}

/// What the Image Recognition page shows for an upload.
#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    pub format: &'static str,
    pub width: u32,
    pub height: u32,
    /// Hardcoded placeholder, not a real classification.
    pub verdict: &'static str,
}

/// Decode a base64 data URL to raw bytes.
///
/// Handles both `data:image/jpeg;base64,...` and raw base64 strings.
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>, VisionError> {
    let base64_data = match data_url.find(',') {
        Some(idx) => &data_url[idx + 1..],
        None => data_url,
    };

    base64::engine::general_purpose::STANDARD
        .decode(base64_data)
        .map_err(|e| VisionError::InvalidEncoding(e.to_string()))
}

/// Detect the upload format from magic bytes. JPEG and PNG only.
fn detect_format(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() >= 3 && bytes[0..3] == [0xFF, 0xD8, 0xFF] {
        Some("jpeg")
    } else if bytes.len() >= 8 && bytes[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        Some("png")
    } else {
        None
    }
}

/// Validate and decode an upload, returning the placeholder analysis.
pub fn analyze_image(bytes: &[u8]) -> Result<ImageReport, VisionError> {
    if bytes.is_empty() {
        return Err(VisionError::EmptyUpload);
    }
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(VisionError::TooLarge {
            size: bytes.len(),
            max: MAX_IMAGE_BYTES,
        });
    }

    let format = detect_format(bytes).ok_or(VisionError::UnsupportedFormat)?;

    let decoded =
        image::load_from_memory(bytes).map_err(|e| VisionError::Decode(e.to_string()))?;

    let (width, height) = decoded.dimensions();
    tracing::debug!(format, width, height, "Image decoded for analysis");

    Ok(ImageReport {
        format,
        width,
        height,
        verdict: PLACEHOLDER_VERDICT,
    })
}
