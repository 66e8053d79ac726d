//! SQLite bet store implementation.
//!
//! Provides persistent storage for bet legs using SQLite and Diesel
//! ORM. A leg row is written in a single insert - fully or not at all.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::connection::DbPool;
use super::model::BetRow;
use super::schema::bets;
use crate::domain::{parse_amount, Bet, BetId, BetPosition, BetStatus, PairId};
use crate::error::{Error, Result};
use crate::port::BetStore;

/// SQLite-backed bet store.
///
/// Implements the [`BetStore`] trait for persistent storage of bet
/// legs.
pub struct SqliteBetStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBetStore {
    /// Create a new SQLite bet store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn to_row(bet: &Bet) -> BetRow {
        BetRow {
            id: bet.id.to_string(),
            pair_id: bet.pair_id.to_string(),
            bet_position: bet.bet_position.to_string(),
            team_a: bet.team_a.clone(),
            team_b: bet.team_b.clone(),
            sport: bet.sport.clone(),
            league: bet.league.clone(),
            game_date: bet.game_date.clone(),
            game_time: bet.game_time.clone(),
            betting_house: bet.betting_house.clone(),
            bet_type: bet.bet_type.clone(),
            selected_side: bet.selected_side.clone(),
            odds: bet.odds.to_string(),
            stake: bet.stake.to_string(),
            payout: bet.payout.to_string(),
            total_pair_stake: bet.total_pair_stake.to_string(),
            profit_percentage: bet.profit_percentage.to_string(),
            status: bet.status.to_string(),
            is_verified: i32::from(bet.is_verified),
            created_at: bet.created_at.to_rfc3339(),
        }
    }

    fn from_row(row: BetRow) -> Result<Bet> {
        let created_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| Error::Parse(e.to_string()))?
            .with_timezone(&Utc);

        Ok(Bet {
            id: BetId::from(row.id),
            pair_id: PairId::from(row.pair_id),
            bet_position: BetPosition::from_str(&row.bet_position)?,
            team_a: row.team_a,
            team_b: row.team_b,
            sport: row.sport,
            league: row.league,
            game_date: row.game_date,
            game_time: row.game_time,
            betting_house: row.betting_house,
            bet_type: row.bet_type,
            selected_side: row.selected_side,
            odds: parse_amount(&row.odds)?,
            stake: parse_amount(&row.stake)?,
            payout: parse_amount(&row.payout)?,
            total_pair_stake: parse_amount(&row.total_pair_stake)?,
            profit_percentage: parse_amount(&row.profit_percentage)?,
            status: BetStatus::from_str(&row.status)?,
            is_verified: row.is_verified != 0,
            created_at,
        })
    }
}

#[async_trait]
impl BetStore for SqliteBetStore {
    async fn insert(&self, bet: &Bet) -> Result<()> {
        let row = Self::to_row(bet);
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        diesel::insert_into(bets::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: &BetId) -> Result<Option<Bet>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let row: Option<BetRow> = bets::table
            .find(id.to_string())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Bet>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<BetRow> = bets::table
            .order(bets::created_at.desc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn list_pair(&self, pair_id: &PairId) -> Result<Vec<Bet>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let rows: Vec<BetRow> = bets::table
            .filter(bets::pair_id.eq(pair_id.to_string()))
            .order(bets::bet_position.asc())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    async fn update_status(&self, id: &BetId, status: BetStatus) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let updated = diesel::update(bets::table.find(id.to_string()))
            .set(bets::status.eq(status.as_str()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(updated > 0)
    }

    async fn delete(&self, id: &BetId) -> Result<bool> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;

        let deleted = diesel::delete(bets::table.find(id.to_string()))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        Ok(deleted > 0)
    }
}
