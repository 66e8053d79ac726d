//! Pair-level profitability metrics.

use rust_decimal::Decimal;

/// Metrics derived from both legs' terms at pair-creation time.
///
/// `profit_percentage_a` reads as: "if leg A wins, the net ROI on the
/// combined position is this many percent" (and symmetrically for B).
/// Both values are stored on the legs as a snapshot; editing a stake
/// after creation requires an explicit recompute-and-repersist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairMetrics {
    pub total_stake: Decimal,
    pub profit_percentage_a: Decimal,
    pub profit_percentage_b: Decimal,
}

impl PairMetrics {
    /// Compute combined stake and each leg's conditional ROI.
    ///
    /// A zero total stake yields 0% on both sides rather than a
    /// division error.
    #[must_use]
    pub fn compute(
        stake_a: Decimal,
        stake_b: Decimal,
        payout_a: Decimal,
        payout_b: Decimal,
    ) -> Self {
        let total_stake = stake_a + stake_b;
        let roi = |payout: Decimal| {
            if total_stake > Decimal::ZERO {
                (payout - total_stake) / total_stake * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            }
        };
        Self {
            total_stake,
            profit_percentage_a: roi(payout_a),
            profit_percentage_b: roi(payout_b),
        }
    }
}
