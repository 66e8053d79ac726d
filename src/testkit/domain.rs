//! Builders for domain primitives used across test suites.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::{Bet, BetId, BetPosition, BetStatus, PairId, PairMetrics};

/// Builder for a bet leg with sensible surebet defaults.
pub struct LegBuilder {
    pair_id: PairId,
    position: BetPosition,
    betting_house: String,
    odds: Decimal,
    stake: Decimal,
    status: BetStatus,
}

impl LegBuilder {
    #[must_use]
    pub fn new(pair_id: &PairId, position: BetPosition) -> Self {
        Self {
            pair_id: pair_id.clone(),
            position,
            betting_house: "Betano".to_string(),
            odds: Decimal::new(210, 2),
            stake: Decimal::new(10000, 2),
            status: BetStatus::Pending,
        }
    }

    #[must_use]
    pub fn house(mut self, house: &str) -> Self {
        self.betting_house = house.to_string();
        self
    }

    #[must_use]
    pub fn odds(mut self, odds: Decimal) -> Self {
        self.odds = odds;
        self
    }

    #[must_use]
    pub fn stake(mut self, stake: Decimal) -> Self {
        self.stake = stake;
        self
    }

    #[must_use]
    pub fn status(mut self, status: BetStatus) -> Self {
        self.status = status;
        self
    }

    /// Build the leg. Pair-level fields are computed as if the
    /// opposite leg mirrored this one.
    #[must_use]
    pub fn build(self) -> Bet {
        let payout = self.stake * self.odds;
        let metrics = PairMetrics::compute(self.stake, self.stake, payout, payout);
        Bet {
            id: BetId::generate(),
            pair_id: self.pair_id,
            bet_position: self.position,
            team_a: "Flamengo".to_string(),
            team_b: "Palmeiras".to_string(),
            sport: "Futebol".to_string(),
            league: "Brasileirão Série A".to_string(),
            game_date: "26-09-2025".to_string(),
            game_time: "19:30".to_string(),
            betting_house: self.betting_house,
            bet_type: "Mais de 2.5".to_string(),
            selected_side: "Mais de 2.5".to_string(),
            odds: self.odds,
            stake: self.stake,
            payout,
            total_pair_stake: metrics.total_stake,
            profit_percentage: metrics.profit_percentage_a,
            status: self.status,
            is_verified: true,
            created_at: Utc::now(),
        }
    }
}
