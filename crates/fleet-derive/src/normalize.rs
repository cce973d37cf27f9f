//! Normalization of raw spreadsheet cell values.
//!
//! Mileage and date cells arrive in inconsistent formats: thousands
//! separators, readings expressed in implicit thousands, and three date
//! notations mixed within one column. Normalization is applied identically
//! when establishing a vehicle's current mileage and when deriving any
//! distance, so comparisons stay self-consistent even where the absolute
//! scale is wrong.

use chrono::NaiveDate;

/// Normalizer configuration for one derivation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Interpret odometer readings in (100, 100000] as thousands
    /// (352 means 352000). Known-lossy for genuine readings in that
    /// range; kept for legacy sheets and off by default.
    pub infer_thousands_scale: bool,
}

/// Normalize a raw mileage cell to a canonical odometer reading.
///
/// Whitespace and comma separators are stripped before parsing. `None`
/// means "discard this record" (distinct from zero, which the engine
/// discards separately).
pub fn normalize_mileage(raw: &str, options: &NormalizeOptions) -> Option<i64> {
    let cleaned: String = raw
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    // "inf"/"nan" parse as non-finite floats; treat them as unparseable
    // rather than letting the saturating cast invent an odometer reading.
    let value = cleaned.parse::<f64>().ok().filter(|value| value.is_finite())?;
    let scaled = if options.infer_thousands_scale {
        infer_scale(value)
    } else {
        value
    };
    Some(scaled.round() as i64)
}

/// The legacy thousands heuristic, preserved as-is: readings in (100, 1000)
/// and [1000, 100000] are taken as thousands; everything else, including
/// values above 1,000,000, is already in base units.
fn infer_scale(value: f64) -> f64 {
    if (value > 100.0 && value < 1000.0) || (1000.0..=100_000.0).contains(&value) {
        value * 1000.0
    } else {
        value
    }
}

/// Normalize a raw date cell: ISO `Y-m-d` on success, the trimmed original
/// text on failure. Never errors; downstream ordering tolerates raw text.
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_flexible_date(trimmed) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => trimmed.to_string(),
    }
}

/// Parse a date cell in any of the accepted notations. `%B` also accepts
/// abbreviated month names, covering text like "Jan 10, 2024".
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 5] = ["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y", "%Y/%m/%d", "%B %d, %Y"];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_loose_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Whole days from `from` back to `date`; negative when `date` is ahead.
pub fn days_between(from: NaiveDate, date: NaiveDate) -> i64 {
    (from - date).num_days()
}

/// Human-readable elapsed time: `2р 3міс`, `1р`, `5міс`, or `15дн` when
/// under a month. Years are 365 days, months 30, matching the day math
/// used by the time-based threshold rules.
pub fn format_time_diff(days: i64) -> String {
    let years = days / 365;
    let months = (days % 365) / 30;
    let mut out = String::new();
    if years > 0 {
        out.push_str(&format!("{years}р "));
    }
    if months > 0 {
        out.push_str(&format!("{months}міс"));
    }
    if out.is_empty() {
        return format!("{days}дн");
    }
    out.trim_end().to_string()
}
