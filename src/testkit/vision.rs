//! Scripted vision-model doubles.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::{SlipImage, VisionModel};

/// Vision model that replies with a fixed canned response.
pub struct ScriptedVision {
    response: String,
    fail: bool,
}

impl ScriptedVision {
    /// Always reply with `response`.
    #[must_use]
    pub fn replying(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail: false,
        }
    }

    /// Always fail with a connection error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl VisionModel for ScriptedVision {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn describe_image(&self, _prompt: &str, _image: &SlipImage) -> Result<String> {
        if self.fail {
            Err(Error::Connection("scripted failure".to_string()))
        } else {
            Ok(self.response.clone())
        }
    }
}
