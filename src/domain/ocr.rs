//! Extraction output shape: what the OCR/AI step hands to the
//! verification screen.
//!
//! Everything is a string on purpose. This data is pre-verification:
//! a human corrects it next, so missing fields default to `""` / `"0"`
//! instead of failing, and nothing here is parsed into domain types
//! yet.

use serde::{Deserialize, Serialize};

/// Extracted fields for one leg of the slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrLeg {
    pub betting_house: String,
    pub bet_type: String,
    pub odds: String,
    pub stake: String,
    pub profit: String,
}

impl Default for OcrLeg {
    fn default() -> Self {
        Self {
            betting_house: String::new(),
            bet_type: String::new(),
            odds: "0".to_string(),
            stake: "0".to_string(),
            profit: "0".to_string(),
        }
    }
}

impl OcrLeg {
    /// True if anything beyond the defaults was captured.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        !self.betting_house.is_empty()
            || !self.bet_type.is_empty()
            || self.odds != "0"
            || self.stake != "0"
            || self.profit != "0"
    }
}

/// Full extraction result: two legs plus shared match fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrData {
    pub leg_a: OcrLeg,
    pub leg_b: OcrLeg,
    pub team_a: String,
    pub team_b: String,
    pub sport: String,
    pub league: String,
    /// Canonical `DD-MM-YYYY` once it leaves the extractor.
    pub game_date: String,
    pub game_time: String,
    /// Overall declared ROI of the surebet, percent.
    pub profit_percentage: String,
}

impl OcrData {
    /// True if the extraction captured anything usable at all.
    /// The inverse is the "cannot analyze text" condition.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        self.leg_a.has_signal()
            || self.leg_b.has_signal()
            || !self.team_a.is_empty()
            || !self.team_b.is_empty()
    }

    /// Plain-text rendering of the extraction, for the diagnostic
    /// endpoint and the one-shot CLI path.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Teams: {} x {}\n", self.team_a, self.team_b));
        out.push_str(&format!("Sport/League: {} / {}\n", self.sport, self.league));
        out.push_str(&format!("Date: {} {}\n", self.game_date, self.game_time));
        out.push_str(&format!("Overall ROI: {}%\n", self.profit_percentage));
        for (label, leg) in [("Leg A", &self.leg_a), ("Leg B", &self.leg_b)] {
            out.push_str(&format!(
                "{}: {} | {} | odds {} | stake {} | profit {}\n",
                label, leg.betting_house, leg.bet_type, leg.odds, leg.stake, leg.profit
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_or_zero() {
        let data = OcrData::default();
        assert_eq!(data.leg_a.odds, "0");
        assert_eq!(data.leg_a.betting_house, "");
        assert!(!data.has_signal());
    }

    #[test]
    fn missing_json_fields_take_defaults() {
        let data: OcrData = serde_json::from_str(r#"{"teamA":"Flamengo"}"#).unwrap();
        assert_eq!(data.team_a, "Flamengo");
        assert_eq!(data.leg_b.stake, "0");
        assert!(data.has_signal());
    }

    #[test]
    fn plain_text_mentions_both_legs() {
        let mut data = OcrData::default();
        data.leg_a.betting_house = "Betano".to_string();
        data.leg_b.betting_house = "KTO".to_string();
        let text = data.to_plain_text();
        assert!(text.contains("Betano"));
        assert!(text.contains("KTO"));
    }
}
