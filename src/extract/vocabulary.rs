//! Injectable extraction vocabulary.
//!
//! Betting-house names, bet-type notations, sport names and the
//! currency tag are domain data, not logic: the fallback parser must
//! be extendable to a new house or market notation without touching
//! control flow. The lists live in configuration with the defaults
//! below; patterns are compiled once at construction.

use regex::Regex;
use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};

/// Configurable vocabulary lists, loaded from the `[vocabulary]`
/// config section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Recognized betting-house names, longest-match-first is not
    /// required; alternation order follows list order.
    pub houses: Vec<String>,
    /// Regex fragments for recognized bet-type notations.
    pub bet_type_patterns: Vec<String>,
    /// Recognized sport names (matched before the `/league` suffix).
    pub sports: Vec<String>,
    /// Currency marker that tags stake amounts on the slip.
    pub currency_tag: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            houses: [
                "Betano",
                "Bet365",
                "Superbet",
                "Estrela Bet",
                "EstrelaBet",
                "KTO",
                "Betfair",
                "Pinnacle",
                "Sportingbet",
                "Novibet",
                "Betnacional",
                "Esportes da Sorte",
                "Vaidebet",
                "Parimatch",
                "Stake",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            bet_type_patterns: [
                // Asian handicap notation: HA +1.5, Handicap -0,25
                r"(?:HA|Handicap)\s*[+-]?\d+(?:[.,]\d+)?",
                // Over/under goal lines, Portuguese and English
                r"(?:Mais|Menos)\s+de\s+\d+(?:[.,]\d+)?",
                r"(?:Over|Under)\s+\d+(?:[.,]\d+)?",
                // Both-teams-to-score markets
                r"Ambas\s+marcam\s*[:-]?\s*(?:Sim|Não)",
                r"(?:Sim|Não)\s+gol",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            sports: [
                "Futebol", "Basquete", "Tênis", "Vôlei", "Futsal", "Hóquei", "Beisebol",
                "MMA", "eSports",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            currency_tag: "R$".to_string(),
        }
    }
}

/// Compiled vocabulary used by the raw-text parser.
#[derive(Debug)]
pub struct Vocabulary {
    house: Regex,
    bet_type: Regex,
    sport_league: Regex,
    strict_line: Regex,
    currency_numbers: Regex,
    teams: Regex,
    percent: Regex,
    currency_tag: String,
}

/// Numeric fragment: optional sign, digits, optional decimal part
/// with either separator.
const NUM: &str = r"-?\d+(?:[.,]\d+)?";

impl Vocabulary {
    /// Compile a vocabulary from configuration.
    ///
    /// # Errors
    ///
    /// Returns a config error if any list is empty or a pattern does
    /// not compile.
    pub fn from_config(config: &VocabularyConfig) -> Result<Self> {
        if config.houses.is_empty() {
            return Err(Error::Config(ConfigError::MissingField {
                field: "vocabulary.houses",
            }));
        }
        if config.bet_type_patterns.is_empty() {
            return Err(Error::Config(ConfigError::MissingField {
                field: "vocabulary.bet_type_patterns",
            }));
        }

        let houses = config
            .houses
            .iter()
            .map(|h| regex::escape(h))
            .collect::<Vec<_>>()
            .join("|");
        let bet_types = config.bet_type_patterns.join("|");
        let sports = config
            .sports
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let cur = regex::escape(&config.currency_tag);

        let compile = |field: &'static str, pattern: String| {
            Regex::new(&pattern).map_err(|e| {
                Error::Config(ConfigError::InvalidValue {
                    field,
                    reason: e.to_string(),
                })
            })
        };

        Ok(Self {
            house: compile("vocabulary.houses", format!("(?i)\\b(?:{houses})\\b"))?,
            bet_type: compile("vocabulary.bet_type_patterns", format!("(?i){bet_types}"))?,
            sport_league: compile(
                "vocabulary.sports",
                format!(r"(?i)\b({sports})\b\s*/\s*(\S[^\r\n]*)"),
            )?,
            // One structured calculator line: house, bet fragment,
            // odds, currency-tagged stake, profit.
            strict_line: compile(
                "vocabulary",
                format!(
                    r"(?i)\b({houses})\b\s+(.+?)\s+({NUM})\s+{cur}\s*({NUM})\s+({NUM})"
                ),
            )?,
            // Any currency-tagged number plus trailing numbers, for
            // loose backfill of odds/stake/profit.
            currency_numbers: compile(
                "vocabulary.currency_tag",
                format!(r"({NUM})\s+{cur}\s*({NUM})\s+({NUM})"),
            )?,
            // Slips separate team names with an en-dash (U+2013), not
            // an ASCII hyphen - hyphens occur inside team names.
            teams: compile(
                "vocabulary",
                r"([\p{L}][\p{L}\p{N} .'-]*?)\s*\u{2013}\s*([\p{L}][\p{L}\p{N} .'-]*)".to_string(),
            )?,
            percent: compile("vocabulary", format!(r"({NUM})\s*%"))?,
            currency_tag: config.currency_tag.clone(),
        })
    }

    /// Matches any known betting-house name.
    #[must_use]
    pub fn house(&self) -> &Regex {
        &self.house
    }

    /// Matches any known bet-type notation.
    #[must_use]
    pub fn bet_type(&self) -> &Regex {
        &self.bet_type
    }

    /// Captures `(sport, league)` from a `Sport/League` fragment.
    #[must_use]
    pub fn sport_league(&self) -> &Regex {
        &self.sport_league
    }

    /// Captures `(house, bet fragment, odds, stake, profit)` from a
    /// fully structured calculator line.
    #[must_use]
    pub fn strict_line(&self) -> &Regex {
        &self.strict_line
    }

    /// Captures `(odds, stake, profit)` around a currency-tagged stake.
    #[must_use]
    pub fn currency_numbers(&self) -> &Regex {
        &self.currency_numbers
    }

    /// Captures `(team A, team B)` around the en-dash separator.
    #[must_use]
    pub fn teams(&self) -> &Regex {
        &self.teams
    }

    /// Captures a decimal percentage value.
    #[must_use]
    pub fn percent(&self) -> &Regex {
        &self.percent
    }

    /// The configured currency marker.
    #[must_use]
    pub fn currency_tag(&self) -> &str {
        &self.currency_tag
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        // Built-in lists always compile.
        Self::from_config(&VocabularyConfig::default())
            .unwrap_or_else(|_| unreachable!("default vocabulary must compile"))
    }
}
