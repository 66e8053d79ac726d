use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Slip extraction errors.
///
/// Individually missing fields never produce an error - the extractor
/// defaults them and lets the verification screen catch the gaps. Only
/// inputs with no usable structure at all are rejected.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("cannot analyze text: no usable slip structure found")]
    Unreadable,

    #[error("invalid image payload: {0}")]
    ImageDecode(String),

    #[error("vision model returned an unusable response: {0}")]
    ModelResponse(String),
}

/// A single field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldIssue {
    /// Field key as it appears in the API payload (e.g. `"oddsA"`).
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Pair verification failure carrying every offending field at once,
/// so a UI can highlight all of them in a single pass.
#[derive(Error, Debug)]
#[error("validation failed: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    #[must_use]
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("{}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Distinct from generic failures so callers can tell a stale id
    /// from a transient error.
    #[error("bet not found: {id}")]
    NotFound { id: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
