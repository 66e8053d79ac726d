//! Structured-response mapping: AI model JSON into [`OcrData`].
//!
//! This is the canonical extraction path. The model is prompted for a
//! fixed JSON shape, but responses drift - nested vs. flat field
//! names, missing keys, numbers as numbers instead of strings. The
//! mapper renames and defaults; it never fails on a missing optional
//! field, because the user fixes gaps on the verification screen.

use serde_json::Value;

use crate::domain::{canonicalize_date, sanitize_number, OcrData, OcrLeg};

/// Map a parsed model response onto the extraction shape.
///
/// Unknown or missing fields keep their defaults. Dates are
/// canonicalized to dash-delimited form; numeric strings are
/// normalized to canonical decimals.
#[must_use]
pub fn ocr_data_from_response(value: &Value) -> OcrData {
    let mut data = OcrData::default();

    data.leg_a = leg_from(value, "legA", "1");
    data.leg_b = leg_from(value, "legB", "2");

    if let Some(v) = field(value, &["teamA", "homeTeam"]) {
        data.team_a = v;
    }
    if let Some(v) = field(value, &["teamB", "awayTeam"]) {
        data.team_b = v;
    }
    if let Some(v) = field(value, &["sport"]) {
        data.sport = v;
    }
    if let Some(v) = field(value, &["league", "championship"]) {
        data.league = v;
    }
    if let Some(v) = field(value, &["gameDate", "date"]) {
        data.game_date = canonicalize_date(&v);
    }
    if let Some(v) = field(value, &["gameTime", "time"]) {
        data.game_time = v.trim().to_string();
    }
    if let Some(v) = field(value, &["profitPercentage", "roi"]) {
        data.profit_percentage = sanitize_number(&v);
    }

    data
}

/// Extract one leg, accepting either a nested object (`legA`) or flat
/// suffixed keys (`bettingHouse1`, `odds1`, ...).
fn leg_from(value: &Value, nested_key: &str, suffix: &str) -> OcrLeg {
    let mut leg = OcrLeg::default();

    let scope = value.get(nested_key).unwrap_or(value);
    let suffixed = |name: &str| format!("{name}{suffix}");

    if let Some(v) = field_in(scope, value, &["bettingHouse", "house"], &suffixed("bettingHouse"), &suffixed("house")) {
        leg.betting_house = v;
    }
    if let Some(v) = field_in(scope, value, &["betType"], &suffixed("betType"), &suffixed("bet")) {
        leg.bet_type = v;
    }
    if let Some(v) = field_in(scope, value, &["odds"], &suffixed("odds"), &suffixed("odd")) {
        leg.odds = or_zero(sanitize_number(&v));
    }
    if let Some(v) = field_in(scope, value, &["stake"], &suffixed("stake"), &suffixed("amount")) {
        leg.stake = or_zero(sanitize_number(&v));
    }
    if let Some(v) = field_in(scope, value, &["profit"], &suffixed("profit"), &suffixed("gain")) {
        leg.profit = or_zero(sanitize_number(&v));
    }

    leg
}

/// Look a field up in the nested scope first, then as a flat suffixed
/// key on the root object.
fn field_in(
    scope: &Value,
    root: &Value,
    nested_names: &[&str],
    flat_primary: &str,
    flat_alias: &str,
) -> Option<String> {
    field(scope, nested_names)
        .or_else(|| field(root, &[flat_primary]))
        .or_else(|| field(root, &[flat_alias]))
}

/// First non-empty string or number under any of the candidate keys.
fn field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn or_zero(s: String) -> String {
    if s.is_empty() {
        "0".to_string()
    } else {
        s
    }
}
