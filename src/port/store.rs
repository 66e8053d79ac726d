//! Store port for bet persistence.

use async_trait::async_trait;

use crate::domain::{Bet, BetId, BetStatus, PairId};
use crate::error::Result;

/// Storage operations for bet legs.
///
/// The pair is never stored as its own entity; grouping happens on
/// read via the shared pair id. A single leg row is written fully or
/// not at all.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `update_status` and `delete` must distinguish "not found" from
///   transient failures (see [`crate::error::Error::NotFound`])
#[async_trait]
pub trait BetStore: Send + Sync {
    /// Insert a new leg.
    async fn insert(&self, bet: &Bet) -> Result<()>;

    /// Get a leg by id.
    async fn get(&self, id: &BetId) -> Result<Option<Bet>>;

    /// List all legs, newest first.
    async fn list(&self) -> Result<Vec<Bet>>;

    /// List the legs sharing a pair id (zero, one or two of them).
    async fn list_pair(&self, pair_id: &PairId) -> Result<Vec<Bet>>;

    /// Set a leg's status in place. Returns true if the leg existed.
    async fn update_status(&self, id: &BetId, status: BetStatus) -> Result<bool>;

    /// Delete a leg. Returns true if the leg existed.
    async fn delete(&self, id: &BetId) -> Result<bool>;
}
