//! AI-powered slip extractor.
//!
//! Wraps a [`VisionModel`] with the extraction prompt and response
//! handling: JSON responses map straight onto [`OcrData`]; anything
//! else falls back to the raw-text parser over the model's output.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{debug, warn};

use crate::domain::OcrData;
use crate::error::{ExtractionError, Result};
use crate::extract::{ocr_data_from_response, parse_slip_text, Vocabulary};
use crate::port::{SlipImage, VisionModel};

/// Extraction prompt sent with every slip image. Asks for the exact
/// JSON shape the mapper expects, in the slip's own language.
const PROMPT: &str = r#"This image is a screenshot of a sports surebet calculator slip.
Extract the fields below and answer with JSON only, no commentary.
Keep all numbers exactly as printed (commas and all). Use "" for
anything you cannot read.

```json
{
  "teamA": "", "teamB": "", "sport": "", "league": "",
  "gameDate": "DD/MM/YYYY", "gameTime": "HH:MM",
  "profitPercentage": "",
  "legA": {"bettingHouse": "", "betType": "", "odds": "", "stake": "", "profit": ""},
  "legB": {"bettingHouse": "", "betType": "", "odds": "", "stake": "", "profit": ""}
}
```"#;

/// Slip extractor over a pluggable vision backend.
pub struct SlipExtractor {
    vision: Arc<dyn VisionModel>,
    vocabulary: Vocabulary,
}

impl SlipExtractor {
    /// Create an extractor over the given vision model and vocabulary.
    #[must_use]
    pub fn new(vision: Arc<dyn VisionModel>, vocabulary: Vocabulary) -> Self {
        Self { vision, vocabulary }
    }

    /// Decode and validate a base64 image payload.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::ImageDecode`] for malformed base64
    /// or an empty payload.
    pub fn image_from_base64(&self, image_base64: &str) -> Result<SlipImage> {
        let trimmed = strip_data_url_prefix(image_base64);
        let bytes = BASE64
            .decode(trimmed.trim())
            .map_err(|e| ExtractionError::ImageDecode(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ExtractionError::ImageDecode("empty image".to_string()).into());
        }
        Ok(SlipImage::new(
            sniff_media_type(&bytes),
            trimmed.trim().to_string(),
        ))
    }

    /// Run the full extraction: vision call, JSON mapping, raw-text
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns the vision call's error as-is, or
    /// [`ExtractionError::Unreadable`] when the response contains no
    /// usable structure.
    pub async fn analyze(&self, image: &SlipImage) -> Result<OcrData> {
        let response = self.vision.describe_image(PROMPT, image).await?;
        debug!(
            provider = self.vision.name(),
            chars = response.len(),
            "vision response received"
        );
        self.parse_response(&response)
    }

    /// Same extraction, rendered as plain text for diagnostics.
    ///
    /// # Errors
    ///
    /// Same conditions as [`analyze`](Self::analyze).
    pub async fn analyze_raw(&self, image: &SlipImage) -> Result<String> {
        Ok(self.analyze(image).await?.to_plain_text())
    }

    fn parse_response(&self, response: &str) -> Result<OcrData> {
        if let Some(json_str) = extract_json(response) {
            match serde_json::from_str::<serde_json::Value>(json_str) {
                Ok(value) => {
                    let data = ocr_data_from_response(&value);
                    if data.has_signal() {
                        return Ok(data);
                    }
                    warn!("structured response carried no usable fields, trying raw text");
                }
                Err(e) => {
                    warn!(error = %e, "response JSON did not parse, trying raw text");
                }
            }
        }
        parse_slip_text(response, &self.vocabulary)
    }
}

/// Find JSON in a markdown code block or raw braces.
fn extract_json(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let start = start + 7;
        let end = text[start..]
            .find("```")
            .map(|i| start + i)
            .unwrap_or(text.len());
        Some(text[start..end].trim())
    } else {
        let start = text.find('{')?;
        let end = text.rfind('}').map(|i| i + 1)?;
        (start < end).then(|| &text[start..end])
    }
}

/// Accept both bare base64 and `data:image/...;base64,` payloads.
fn strip_data_url_prefix(raw: &str) -> &str {
    match raw.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => raw,
    }
}

/// Minimal magic-byte sniffing; PNG slips dominate, JPEG happens.
fn sniff_media_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else {
        "image/png"
    }
}
