//! Raw-text fallback parser for slip screenshots.
//!
//! This path runs when the structured AI response is unavailable and
//! all we have is recognized text from a semi-structured calculator
//! layout with no schema guarantee. Extraction is layered, falling
//! through on failure, and degrades to empty/zero fields everywhere:
//! the human verification screen downstream is the real correctness
//! gate, this parser only reduces manual entry.

use rust_decimal::Decimal;
use tracing::debug;

use super::vocabulary::Vocabulary;
use crate::domain::{parse_amount, parse_amount_or_zero, sanitize_number, OcrData};
use crate::error::{ExtractionError, Result};

/// Parse recognized slip text into the extraction shape.
///
/// # Errors
///
/// Returns [`ExtractionError::Unreadable`] only when no usable
/// structure was found at all; individually missing fields default
/// silently.
pub fn parse_slip_text(text: &str, vocab: &Vocabulary) -> Result<OcrData> {
    let mut data = OcrData::default();

    if !extract_strict_lines(text, vocab, &mut data) {
        debug!("no strict calculator lines matched, trying loose extraction");
        extract_loose(text, vocab, &mut data);
    }

    extract_teams(text, vocab, &mut data);
    extract_sport_league(text, vocab, &mut data);
    extract_percentage(text, vocab, &mut data);
    backfill_profit(&mut data);

    if data.has_signal() {
        Ok(data)
    } else {
        Err(ExtractionError::Unreadable.into())
    }
}

/// Layer 1: fully structured calculator lines - house, bet fragment,
/// odds, currency-tagged stake, profit. The first two matches become
/// legs A and B.
fn extract_strict_lines(text: &str, vocab: &Vocabulary, data: &mut OcrData) -> bool {
    let mut matched = 0;
    for caps in vocab.strict_line().captures_iter(text).take(2) {
        let leg = if matched == 0 {
            &mut data.leg_a
        } else {
            &mut data.leg_b
        };
        leg.betting_house = caps[1].trim().to_string();
        leg.bet_type = caps[2].trim().to_string();
        leg.odds = sanitize_number(&caps[3]);
        leg.stake = sanitize_number(&caps[4]);
        leg.profit = sanitize_number(&caps[5]);
        matched += 1;
    }
    matched > 0
}

/// Layer 2: independent loose scans - first two house-name hits, first
/// two bet-type hits, and currency-tagged lines for the numbers.
fn extract_loose(text: &str, vocab: &Vocabulary, data: &mut OcrData) {
    for (i, m) in vocab.house().find_iter(text).take(2).enumerate() {
        let leg = if i == 0 { &mut data.leg_a } else { &mut data.leg_b };
        leg.betting_house = m.as_str().to_string();
    }

    for (i, m) in vocab.bet_type().find_iter(text).take(2).enumerate() {
        let leg = if i == 0 { &mut data.leg_a } else { &mut data.leg_b };
        leg.bet_type = m.as_str().trim().to_string();
    }

    let currency_lines = text
        .lines()
        .filter(|line| line.contains(vocab.currency_tag()));
    for (i, line) in currency_lines.take(2).enumerate() {
        let Some(caps) = vocab.currency_numbers().captures(line) else {
            continue;
        };
        let leg = if i == 0 { &mut data.leg_a } else { &mut data.leg_b };
        leg.odds = sanitize_number(&caps[1]);
        leg.stake = sanitize_number(&caps[2]);
        leg.profit = sanitize_number(&caps[3]);
    }
}

/// Layer 3: team names around the en-dash separator - whole-text
/// pattern first, then a per-line scan, then only the header (first
/// three lines, where teams typically appear).
fn extract_teams(text: &str, vocab: &Vocabulary, data: &mut OcrData) {
    if let Some(caps) = vocab.teams().captures(text) {
        data.team_a = caps[1].trim().to_string();
        data.team_b = caps[2].trim().to_string();
        return;
    }

    for line in text.lines() {
        if let Some((a, b)) = line.split_once('\u{2013}') {
            if !a.trim().is_empty() && !b.trim().is_empty() {
                data.team_a = a.trim().to_string();
                data.team_b = b.trim().to_string();
                return;
            }
        }
    }

    for line in text.lines().take(3) {
        if let Some(caps) = vocab.teams().captures(line) {
            data.team_a = caps[1].trim().to_string();
            data.team_b = caps[2].trim().to_string();
            return;
        }
    }
}

fn extract_sport_league(text: &str, vocab: &Vocabulary, data: &mut OcrData) {
    if let Some(caps) = vocab.sport_league().captures(text) {
        data.sport = caps[1].trim().to_string();
        data.league = caps[2].trim().to_string();
    }
}

fn extract_percentage(text: &str, vocab: &Vocabulary, data: &mut OcrData) {
    if let Some(caps) = vocab.percent().captures(text) {
        data.profit_percentage = sanitize_number(&caps[1]);
    }
}

/// Layer 6: when a leg came out with no profit (or zero), derive it
/// from stake and odds.
fn backfill_profit(data: &mut OcrData) {
    for leg in [&mut data.leg_a, &mut data.leg_b] {
        let profit = parse_amount_or_zero(&leg.profit);
        if profit != Decimal::ZERO {
            continue;
        }
        let (Ok(stake), Ok(odds)) = (parse_amount(&leg.stake), parse_amount(&leg.odds)) else {
            continue;
        };
        if stake > Decimal::ZERO && odds > Decimal::ZERO {
            leg.profit = (stake * odds - stake).normalize().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn vocab() -> Vocabulary {
        Vocabulary::default()
    }

    const SLIP: &str = "\
Flamengo \u{2013} Palmeiras
Futebol / Brasileirão Série A
26/09/2025 19:30
Betano Mais de 2,5 2,10 R$ 100,00 10,00
KTO Menos de 2,5 2,05 R$ 102,44 7,56
ROI: 4,35%";

    #[test]
    fn structured_slip_populates_both_legs() {
        let data = parse_slip_text(SLIP, &vocab()).unwrap();
        assert_eq!(data.leg_a.betting_house, "Betano");
        assert_eq!(data.leg_a.bet_type, "Mais de 2,5");
        assert_eq!(data.leg_a.odds, "2.10");
        assert_eq!(data.leg_a.stake, "100.00");
        assert_eq!(data.leg_b.betting_house, "KTO");
        assert_eq!(data.leg_b.stake, "102.44");
        assert_eq!(data.team_a, "Flamengo");
        assert_eq!(data.team_b, "Palmeiras");
        assert_eq!(data.sport, "Futebol");
        assert_eq!(data.league, "Brasileirão Série A");
        assert_eq!(data.profit_percentage, "4.35");
    }

    #[test]
    fn loose_extraction_backfills_from_currency_lines() {
        // No line matches the strict pattern (bet fragment missing),
        // but houses, a bet type and currency-tagged numbers exist.
        let text = "\
Superbet apostas
Handicap -1,5 em destaque
2,30 R$ 50,00 0
Pinnacle linha
2,00 R$ 57,50 0";
        let data = parse_slip_text(text, &vocab()).unwrap();
        assert_eq!(data.leg_a.betting_house, "Superbet");
        assert_eq!(data.leg_b.betting_house, "Pinnacle");
        assert_eq!(data.leg_a.bet_type, "Handicap -1,5");
        assert_eq!(data.leg_a.odds, "2.30");
        assert_eq!(data.leg_a.stake, "50.00");
        // Zero profit is backfilled as stake * odds - stake.
        assert_eq!(parse_amount(&data.leg_a.profit).unwrap(), dec!(65));
        assert_eq!(parse_amount(&data.leg_b.profit).unwrap(), dec!(57.5));
    }

    #[test]
    fn hyphenated_team_names_do_not_split() {
        let text = "cabeçalho qualquer\nAtlético-MG \u{2013} Grêmio FBPA\nBetano linha";
        let data = parse_slip_text(text, &vocab()).unwrap();
        assert_eq!(data.team_a, "Atlético-MG");
        assert_eq!(data.team_b, "Grêmio FBPA");
    }

    #[test]
    fn teams_fall_back_to_line_split() {
        // Parentheses defeat the name pattern; the per-line split on
        // the separator glyph still recovers both names.
        let text = "Flamengo (RJ) \u{2013} Palmeiras (SP)\nBetano linha";
        let data = parse_slip_text(text, &vocab()).unwrap();
        assert_eq!(data.team_a, "Flamengo (RJ)");
        assert_eq!(data.team_b, "Palmeiras (SP)");
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let data = parse_slip_text("Betano", &vocab()).unwrap();
        assert_eq!(data.leg_a.betting_house, "Betano");
        assert_eq!(data.leg_a.odds, "0");
        assert_eq!(data.team_a, "");
    }

    #[test]
    fn unusable_text_is_a_distinguishable_error() {
        let err = parse_slip_text("nada para ver aqui", &vocab()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Extraction(ExtractionError::Unreadable)
        ));
    }

    #[test]
    fn profit_backfill_skips_populated_legs() {
        let data = parse_slip_text(SLIP, &vocab()).unwrap();
        // Strict path captured explicit profits; they must survive.
        assert_eq!(data.leg_a.profit, "10.00");
        assert_eq!(data.leg_b.profit, "7.56");
    }
}
