//! Exchange- and transport-agnostic domain logic: the bet-pair
//! financial model, numeric/date normalization, and pair verification.

mod bet;
mod gamedate;
mod id;
mod metrics;
mod money;
mod ocr;
mod pair;
mod validate;

pub use bet::{Bet, BetPosition, BetStatus, NewBet};
pub use gamedate::{canonicalize_date, date_from_parts, time_from_parts};
pub use id::{BetId, PairId};
pub use metrics::PairMetrics;
pub use money::{parse_amount, parse_amount_or_zero, sanitize_number};
pub use ocr::{OcrData, OcrLeg};
pub use pair::{PairOutcome, PairStatus};
pub use validate::{validate_pair, LegDraft, PairDraft};
