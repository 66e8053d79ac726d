//! Database model types for Diesel ORM.
//!
//! Monetary columns are TEXT holding canonical decimal strings so no
//! precision is lost through a float round-trip.

use diesel::prelude::*;

use super::schema::bets;

/// Database row for a bet leg.
#[derive(Queryable, Selectable, Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = bets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BetRow {
    pub id: String,
    pub pair_id: String,
    pub bet_position: String,
    pub team_a: String,
    pub team_b: String,
    pub sport: String,
    pub league: String,
    pub game_date: String,
    pub game_time: String,
    pub betting_house: String,
    pub bet_type: String,
    pub selected_side: String,
    pub odds: String,
    pub stake: String,
    pub payout: String,
    pub total_pair_stake: String,
    pub profit_percentage: String,
    pub status: String,
    pub is_verified: i32,
    pub created_at: String,
}
