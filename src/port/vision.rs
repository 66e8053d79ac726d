//! Vision-model port for slip image extraction.
//!
//! Defines the interface to the external multimodal model: image
//! bytes in, free text (ideally JSON) out. The single awaited external
//! call in the system; no retry policy, a failure surfaces directly.

use async_trait::async_trait;

use crate::error::Result;

/// A slip screenshot ready to send to a multimodal API.
#[derive(Debug, Clone)]
pub struct SlipImage {
    /// MIME type, e.g. `image/png`.
    pub media_type: String,
    /// Image bytes, already base64-encoded.
    pub base64: String,
}

impl SlipImage {
    pub fn new(media_type: impl Into<String>, base64: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            base64: base64.into(),
        }
    }
}

/// Client for multimodal image-understanding requests.
///
/// Implementations wrap specific providers (OpenAI, Anthropic) and
/// handle authentication and response decoding.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send an image with an instruction prompt and return the
    /// model's text response.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the response is
    /// invalid.
    async fn describe_image(&self, prompt: &str, image: &SlipImage) -> Result<String>;
}
