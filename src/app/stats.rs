//! Aggregate pair reporting.
//!
//! Pairs are derived on read by grouping legs on their correlation id
//! and running the resolution state machine over each group.
//! Incomplete pairs are counted on their own - "missing a leg" and
//! "waiting on results" are different situations and must not blur
//! together in statistics.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Bet, PairOutcome, PairStatus};

/// Aggregate report over every stored pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairReport {
    pub total_pairs: usize,
    pub pending: usize,
    pub won: usize,
    pub lost: usize,
    pub returned: usize,
    /// Pairs with only one persisted leg; never folded into pending.
    pub incomplete: usize,
    /// Sum of stakes over resolved pairs only; money still in flight
    /// on pending or incomplete pairs is not "staked and settled".
    pub total_staked: Decimal,
    /// Sum of net results over resolved pairs.
    pub net_result: Decimal,
}

/// Build the report from a flat list of legs.
#[must_use]
pub fn build_report(bets: &[Bet]) -> PairReport {
    let mut pairs: BTreeMap<&str, Vec<&Bet>> = BTreeMap::new();
    for bet in bets {
        pairs.entry(bet.pair_id.as_str()).or_default().push(bet);
    }

    let mut report = PairReport::default();
    for legs in pairs.values() {
        let outcome = PairOutcome::resolve(legs);
        report.total_pairs += 1;
        if outcome.incomplete {
            report.incomplete += 1;
            continue;
        }
        match outcome.status {
            PairStatus::Pending => {
                report.pending += 1;
                continue;
            }
            PairStatus::Won => report.won += 1,
            PairStatus::Lost => report.lost += 1,
            PairStatus::Returned => report.returned += 1,
        }
        report.total_staked += outcome.total_stake;
        report.net_result += outcome.net_result;
    }
    report
}
