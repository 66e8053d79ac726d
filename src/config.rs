//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values (vision API keys are only ever read
//! from the environment). Every section has defaults so a missing
//! config file still yields a runnable local setup.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};
use crate::extract::VocabularyConfig;

/// Supported vision-model providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionProvider {
    #[default]
    Anthropic,
    OpenAi,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub vision: VisionConfig,
    pub logging: LoggingConfig,
    /// Extraction vocabulary: domain data, editable without code
    /// changes.
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the HTTP API.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database URL/path.
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "hedgebook.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Which provider to call for slip extraction.
    pub provider: VisionProvider,
    /// Model identifier passed through to the provider.
    pub model: String,
    /// Maximum tokens to generate per extraction.
    pub max_tokens: usize,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            provider: VisionProvider::Anthropic,
            model: "claude-sonnet-4-5".to_string(),
            max_tokens: 4096,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a
    /// value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the given path if it exists, otherwise fall back to
    /// defaults. Lets `hedgebook serve` run without a config file.
    ///
    /// # Errors
    ///
    /// Returns an error only for an unreadable or invalid existing
    /// file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate invariants not expressible through serde defaults.
    ///
    /// # Errors
    ///
    /// Returns a config error naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind.is_empty() {
            return Err(ConfigError::MissingField {
                field: "server.bind",
            }
            .into());
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        if self.vision.model.is_empty() {
            return Err(ConfigError::MissingField {
                field: "vision.model",
            }
            .into());
        }
        Ok(())
    }

    /// Initialize the tracing subscriber from the logging section.
    /// `RUST_LOG` wins over the configured level when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
