//! Pair resolution: aggregate status and net result over two legs.
//!
//! A pair is a derived view, never a stored entity. Resolution is a
//! pure function of the legs' current statuses and terms - there is no
//! transition history to consult.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::bet::{Bet, BetPosition, BetStatus};

/// Aggregate status of a surebet pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairStatus {
    Pending,
    Won,
    Lost,
    Returned,
}

/// Resolved view over a pair's legs.
///
/// `incomplete` distinguishes "waiting on results" from "missing a
/// leg" - two different user-facing situations that aggregate
/// statistics must keep apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairOutcome {
    pub status: PairStatus,
    pub net_result: Decimal,
    pub total_stake: Decimal,
    pub incomplete: bool,
}

impl PairOutcome {
    /// Resolve a pair from whatever legs currently exist for it.
    ///
    /// With both legs present the table is:
    ///
    /// - either leg pending → pending, net 0;
    /// - both returned → returned, net 0;
    /// - any leg won → won, net = winning payout + returned stakes
    ///   − total stake (if both report won, leg A is taken as the
    ///   winner - fixed A-before-B ordering, hedges should never do
    ///   this but it must not crash);
    /// - otherwise lost, net = returned stakes − total stake.
    ///
    /// A single known leg resolves to pending with `incomplete = true`
    /// and the known stake as the total.
    #[must_use]
    pub fn resolve(legs: &[&Bet]) -> Self {
        let mut ordered: Vec<&Bet> = legs.to_vec();
        ordered.sort_by_key(|leg| match leg.bet_position {
            BetPosition::A => 0u8,
            BetPosition::B => 1u8,
        });

        match ordered.as_slice() {
            [] => Self {
                status: PairStatus::Pending,
                net_result: Decimal::ZERO,
                total_stake: Decimal::ZERO,
                incomplete: true,
            },
            [leg] => Self {
                status: PairStatus::Pending,
                net_result: Decimal::ZERO,
                total_stake: leg.stake,
                incomplete: true,
            },
            [a, b, ..] => Self::resolve_complete(a, b),
        }
    }

    fn resolve_complete(a: &Bet, b: &Bet) -> Self {
        let total_stake = a.stake + b.stake;

        if a.status.is_pending() || b.status.is_pending() {
            return Self {
                status: PairStatus::Pending,
                net_result: Decimal::ZERO,
                total_stake,
                incomplete: false,
            };
        }

        let returned_stakes: Decimal = [a, b]
            .iter()
            .filter(|leg| leg.status == BetStatus::Returned)
            .map(|leg| leg.stake)
            .sum();

        if a.status == BetStatus::Returned && b.status == BetStatus::Returned {
            return Self {
                status: PairStatus::Returned,
                net_result: Decimal::ZERO,
                total_stake,
                incomplete: false,
            };
        }

        // A before B: the tie-break when both report won.
        let winner = [a, b]
            .into_iter()
            .find(|leg| leg.status == BetStatus::Won);

        match winner {
            Some(leg) => Self {
                status: PairStatus::Won,
                net_result: leg.payout + returned_stakes - total_stake,
                total_stake,
                incomplete: false,
            },
            None => Self {
                status: PairStatus::Lost,
                net_result: returned_stakes - total_stake,
                total_stake,
                incomplete: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BetId, PairId};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn leg(position: BetPosition, stake: Decimal, payout: Decimal, status: BetStatus) -> Bet {
        Bet {
            id: BetId::generate(),
            pair_id: PairId::new("pair-1"),
            bet_position: position,
            team_a: "Flamengo".to_string(),
            team_b: "Palmeiras".to_string(),
            sport: "Futebol".to_string(),
            league: "Brasileirão".to_string(),
            game_date: "26-09-2025".to_string(),
            game_time: "19:30".to_string(),
            betting_house: "Betano".to_string(),
            bet_type: "Mais de 2.5".to_string(),
            selected_side: "Mais de 2.5".to_string(),
            odds: dec!(2.0),
            stake,
            payout,
            total_pair_stake: dec!(200),
            profit_percentage: dec!(25),
            status,
            is_verified: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn pending_leg_keeps_pair_pending() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Won);
        let b = leg(BetPosition::B, dec!(100), dec!(190), BetStatus::Pending);
        let outcome = PairOutcome::resolve(&[&a, &b]);
        assert_eq!(outcome.status, PairStatus::Pending);
        assert_eq!(outcome.net_result, dec!(0));
        assert!(!outcome.incomplete);
    }

    #[test]
    fn won_leg_settles_pair_as_won() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Won);
        let b = leg(BetPosition::B, dec!(100), dec!(190), BetStatus::Lost);
        let outcome = PairOutcome::resolve(&[&a, &b]);
        assert_eq!(outcome.status, PairStatus::Won);
        assert_eq!(outcome.total_stake, dec!(200));
        assert_eq!(outcome.net_result, dec!(50));
    }

    #[test]
    fn won_with_returned_leg_credits_returned_stake() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Won);
        let b = leg(BetPosition::B, dec!(80), dec!(160), BetStatus::Returned);
        let outcome = PairOutcome::resolve(&[&a, &b]);
        assert_eq!(outcome.status, PairStatus::Won);
        // 250 payout + 80 returned - 180 staked
        assert_eq!(outcome.net_result, dec!(150));
    }

    #[test]
    fn both_returned_is_a_wash() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Returned);
        let b = leg(BetPosition::B, dec!(100), dec!(190), BetStatus::Returned);
        let outcome = PairOutcome::resolve(&[&a, &b]);
        assert_eq!(outcome.status, PairStatus::Returned);
        assert_eq!(outcome.net_result, dec!(0));
    }

    #[test]
    fn lost_with_returned_leg_loses_only_the_lost_stake() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Lost);
        let b = leg(BetPosition::B, dec!(80), dec!(160), BetStatus::Returned);
        let outcome = PairOutcome::resolve(&[&a, &b]);
        assert_eq!(outcome.status, PairStatus::Lost);
        assert_eq!(outcome.net_result, dec!(-100));
    }

    #[test]
    fn both_lost_loses_everything() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Lost);
        let b = leg(BetPosition::B, dec!(100), dec!(190), BetStatus::Lost);
        let outcome = PairOutcome::resolve(&[&a, &b]);
        assert_eq!(outcome.status, PairStatus::Lost);
        assert_eq!(outcome.net_result, dec!(-200));
    }

    #[test]
    fn both_won_takes_leg_a_as_winner() {
        let a = leg(BetPosition::A, dec!(100), dec!(250), BetStatus::Won);
        let b = leg(BetPosition::B, dec!(100), dec!(300), BetStatus::Won);
        // Resolution order is by position, not argument order.
        let outcome = PairOutcome::resolve(&[&b, &a]);
        assert_eq!(outcome.status, PairStatus::Won);
        assert_eq!(outcome.net_result, dec!(50));
    }

    #[test]
    fn single_leg_is_pending_and_incomplete() {
        let b = leg(BetPosition::B, dec!(100), dec!(190), BetStatus::Won);
        let outcome = PairOutcome::resolve(&[&b]);
        assert_eq!(outcome.status, PairStatus::Pending);
        assert_eq!(outcome.net_result, dec!(0));
        assert_eq!(outcome.total_stake, dec!(100));
        assert!(outcome.incomplete);
    }
}
