//! Game date and time canonicalization.
//!
//! Game dates are calendar dates with no timezone: they are stored and
//! served as plain `DD-MM-YYYY` strings so a date never rolls over when
//! the server and the bettor sit in different timezones. Three external
//! shapes feed into the canonical form:
//!
//! - structured year/month/day (and hour/minute) captures from OCR,
//! - slash-delimited `DD/MM/YYYY` as emitted by the AI extraction step,
//! - the canonical dash-delimited `DD-MM-YYYY` itself.
//!
//! Slash and dash forms agree on field order, so conversion is a pure
//! character substitution with no reinterpretation.

/// Convert any slash-delimited date to the canonical dash-delimited
/// form. Already-canonical input passes through unchanged.
#[must_use]
pub fn canonicalize_date(raw: &str) -> String {
    raw.trim().replace('/', "-")
}

/// Build the canonical `DD-MM-YYYY` string from structured fields.
#[must_use]
pub fn date_from_parts(year: u16, month: u8, day: u8) -> String {
    format!("{day:02}-{month:02}-{year:04}")
}

/// Build the canonical zero-padded `HH:MM` string.
#[must_use]
pub fn time_from_parts(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}
