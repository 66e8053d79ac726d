//! Pre-commit verification of a pair draft.
//!
//! The verification screen hands back user-editable string fields; the
//! validator is the gate between that screen and persistence. It never
//! stops at the first problem - every offending field is reported so
//! the UI can highlight all of them in one pass.

use rust_decimal::Decimal;

use super::money::parse_amount;
use crate::error::{FieldIssue, ValidationError};

/// One leg of a pair as it stands on the verification screen -
/// all fields still strings, exactly as the user can edit them.
#[derive(Debug, Clone, Default)]
pub struct LegDraft {
    /// "A" or "B".
    pub bet_position: String,
    pub team_a: String,
    pub team_b: String,
    pub betting_house: String,
    pub bet_type: String,
    pub game_date: String,
    pub odds: String,
    pub stake: String,
    /// May legitimately be zero or negative.
    pub profit_percentage: String,
}

/// Both legs of a pair awaiting confirmation.
#[derive(Debug, Clone, Default)]
pub struct PairDraft {
    pub leg_a: LegDraft,
    pub leg_b: LegDraft,
}

/// Validate a pair draft, collecting every field-keyed issue.
///
/// Field keys carry an `A`/`B` suffix matching the leg they belong to
/// (e.g. `oddsA`, `stakeB`); cross-leg issues use the shared key
/// (`teams`, `betPosition`).
///
/// # Errors
///
/// Returns a [`ValidationError`] listing all issues when any check
/// fails.
pub fn validate_pair(draft: &PairDraft) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    validate_leg(&draft.leg_a, "A", &mut issues);
    validate_leg(&draft.leg_b, "B", &mut issues);

    if !teams_match(&draft.leg_a, &draft.leg_b) {
        issues.push(FieldIssue::new(
            "teams",
            "both legs must reference the same two teams",
        ));
    }

    match (
        normalize_position(&draft.leg_a.bet_position),
        normalize_position(&draft.leg_b.bet_position),
    ) {
        (Some(a), Some(b)) if a == b => {
            issues.push(FieldIssue::new(
                "betPosition",
                "the two legs of a pair must occupy different positions",
            ));
        }
        (Some(_), Some(_)) => {}
        _ => {
            issues.push(FieldIssue::new(
                "betPosition",
                "bet position must be A or B on both legs",
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

fn validate_leg(leg: &LegDraft, suffix: &str, issues: &mut Vec<FieldIssue>) {
    let require = |value: &str, field: &str, issues: &mut Vec<FieldIssue>| {
        if value.trim().is_empty() {
            issues.push(FieldIssue::new(
                format!("{field}{suffix}"),
                "is required",
            ));
        }
    };

    require(&leg.betting_house, "bettingHouse", issues);
    require(&leg.bet_type, "betType", issues);
    require(&leg.game_date, "gameDate", issues);

    match parse_amount(&leg.odds) {
        Ok(odds) if odds > Decimal::ZERO => {}
        _ => issues.push(FieldIssue::new(
            format!("odds{suffix}"),
            "must be a number greater than zero",
        )),
    }

    match parse_amount(&leg.stake) {
        Ok(stake) if stake > Decimal::ZERO => {}
        _ => issues.push(FieldIssue::new(
            format!("stake{suffix}"),
            "must be a number greater than zero",
        )),
    }

    // Sign-free: a percentage can be shown before sign context is known.
    if parse_amount(&leg.profit_percentage).is_err() {
        issues.push(FieldIssue::new(
            format!("profitPercentage{suffix}"),
            "must be a number",
        ));
    }
}

/// Case-insensitive, whitespace-trimmed, order-insensitive comparison
/// of the two teams across legs. A mismatch is an error for the user
/// to resolve, never a silent auto-fix.
fn teams_match(a: &LegDraft, b: &LegDraft) -> bool {
    let norm = |s: &str| s.trim().to_lowercase();
    let mut left = [norm(&a.team_a), norm(&a.team_b)];
    let mut right = [norm(&b.team_a), norm(&b.team_b)];
    left.sort();
    right.sort();
    left == right
}

fn normalize_position(raw: &str) -> Option<char> {
    match raw.trim() {
        "A" | "a" => Some('A'),
        "B" | "b" => Some('B'),
        _ => None,
    }
}
