//! Anthropic Claude vision client.
//!
//! Provides an implementation of the [`VisionModel`] trait for the
//! Anthropic Messages API, sending a base64 image block alongside the
//! instruction prompt.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::port::{SlipImage, VisionModel};

/// Anthropic Messages API endpoint.
const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value.
const API_VERSION: &str = "2023-06-01";

/// Anthropic Claude API client.
#[derive(Debug)]
pub struct Anthropic {
    /// HTTP client for API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Model identifier (e.g., "claude-sonnet-4-5").
    model: String,
    /// Maximum tokens to generate in the response.
    max_tokens: usize,
}

impl Anthropic {
    /// Create a new Anthropic client with explicit configuration.
    #[must_use]
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: usize) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            max_tokens,
        }
    }

    /// Create a client from the `ANTHROPIC_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env(model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            Error::Config(crate::error::ConfigError::MissingField {
                field: "ANTHROPIC_API_KEY",
            })
        })?;
        Ok(Self::new(api_key, model, 4096))
    }

    /// Override the response token budget.
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[derive(Serialize)]
struct Request {
    model: String,
    max_tokens: usize,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentPart>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentPart {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Serialize)]
struct ImageSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: String,
    data: String,
}

#[derive(Deserialize)]
struct Response {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

#[async_trait]
impl VisionModel for Anthropic {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn describe_image(&self, prompt: &str, image: &SlipImage) -> Result<String> {
        let request = Request {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentPart::Image {
                        source: ImageSource {
                            kind: "base64",
                            media_type: image.media_type.clone(),
                            data: image.base64.clone(),
                        },
                    },
                    ContentPart::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<Response>()
            .await?;

        Ok(response
            .content
            .into_iter()
            .map(|c| c.text)
            .collect::<Vec<_>>()
            .join(""))
    }
}
