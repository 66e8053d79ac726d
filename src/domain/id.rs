//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bet (leg) identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BetId(String);

impl BetId {
    /// Create a new `BetId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the bet ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BetId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Pair correlation identifier - groups exactly two opposing legs.
///
/// A pair is never materialized as its own record; the shared
/// correlation id is the only link between its legs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairId(String);

impl PairId {
    /// Create a new `PairId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the pair ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PairId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PairId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
