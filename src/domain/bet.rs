//! Bet leg types.
//!
//! A `Bet` is one half of a hedge: the unit of business meaning is the
//! pair (see [`crate::domain::pair`]), but legs are what get persisted
//! and mutated. Two legs share a `pair_id` and must sit on opposite
//! [`BetPosition`]s.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BetId, PairId};

/// Lifecycle status of a single leg.
///
/// Starts at `Pending`; resolution actions set it per leg. Nothing
/// prevents re-setting a terminal status - the contract is plain
/// in-place mutation with no history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
    Returned,
}

impl BetStatus {
    /// Stable string form used in storage and the API.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BetStatus::Pending => "pending",
            BetStatus::Won => "won",
            BetStatus::Lost => "lost",
            BetStatus::Returned => "returned",
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, BetStatus::Pending)
    }
}

impl fmt::Display for BetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetStatus {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BetStatus::Pending),
            "won" => Ok(BetStatus::Won),
            "lost" => Ok(BetStatus::Lost),
            "returned" => Ok(BetStatus::Returned),
            other => Err(crate::error::Error::Parse(format!(
                "unknown bet status '{other}'"
            ))),
        }
    }
}

/// Which side of the pair a leg occupies. Exactly one `A` and one `B`
/// per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetPosition {
    A,
    B,
}

impl BetPosition {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BetPosition::A => "A",
            BetPosition::B => "B",
        }
    }
}

impl fmt::Display for BetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BetPosition {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(BetPosition::A),
            "B" => Ok(BetPosition::B),
            other => Err(crate::error::Error::Parse(format!(
                "unknown bet position '{other}'"
            ))),
        }
    }
}

/// One persisted leg of a surebet pair.
///
/// `payout`, `total_pair_stake` and `profit_percentage` are snapshots
/// taken at creation time; they are not recomputed if terms are edited
/// later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub id: BetId,
    pub pair_id: PairId,
    pub bet_position: BetPosition,

    // Match context. Game date/time are plain strings on purpose:
    // calendar dates carry no timezone and must not drift.
    pub team_a: String,
    pub team_b: String,
    pub sport: String,
    pub league: String,
    /// Canonical `DD-MM-YYYY`.
    pub game_date: String,
    /// Zero-padded `HH:MM`.
    pub game_time: String,

    // Wager terms.
    pub betting_house: String,
    pub bet_type: String,
    pub selected_side: String,
    pub odds: Decimal,
    pub stake: Decimal,
    /// Gross return if this leg wins (stake x odds at placement time).
    pub payout: Decimal,

    // Pair-level snapshot, identical on both legs.
    pub total_pair_stake: Decimal,
    /// This leg's conditional ROI on the combined position, percent.
    pub profit_percentage: Decimal,

    pub status: BetStatus,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Creation payload: a leg minus server-assigned fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBet {
    pub pair_id: PairId,
    pub bet_position: BetPosition,
    pub team_a: String,
    pub team_b: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub league: String,
    pub game_date: String,
    #[serde(default)]
    pub game_time: String,
    pub betting_house: String,
    pub bet_type: String,
    /// Defaults to `bet_type` when absent.
    #[serde(default)]
    pub selected_side: Option<String>,
    pub odds: Decimal,
    pub stake: Decimal,
    pub payout: Decimal,
    pub total_pair_stake: Decimal,
    pub profit_percentage: Decimal,
    #[serde(default)]
    pub is_verified: bool,
}

impl Bet {
    /// Materialize a leg from a creation payload.
    ///
    /// Assigns a fresh id, stamps `created_at`, starts the leg at
    /// [`BetStatus::Pending`] and defaults the selected side to the
    /// bet type, matching the server-side defaulting contract.
    #[must_use]
    pub fn from_new(new: NewBet, now: DateTime<Utc>) -> Self {
        let selected_side = match new.selected_side {
            Some(side) if !side.trim().is_empty() => side,
            _ => new.bet_type.clone(),
        };
        Self {
            id: BetId::generate(),
            pair_id: new.pair_id,
            bet_position: new.bet_position,
            team_a: new.team_a,
            team_b: new.team_b,
            sport: new.sport,
            league: new.league,
            game_date: super::gamedate::canonicalize_date(&new.game_date),
            game_time: new.game_time,
            betting_house: new.betting_house,
            bet_type: new.bet_type,
            selected_side,
            odds: new.odds,
            stake: new.stake,
            payout: new.payout,
            total_pair_stake: new.total_pair_stake,
            profit_percentage: new.profit_percentage,
            status: BetStatus::Pending,
            is_verified: new.is_verified,
            created_at: now,
        }
    }
}
