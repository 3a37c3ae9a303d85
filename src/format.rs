// 💵 Formatters - Value-to-display-string conversion (en-US)
//
// Presentation-layer helpers only; the search engine never sees formatted
// values. Both functions are total: invalid input degrades to a documented
// fallback with a warn-level diagnostic, never an error. Logging must not
// change the returned value.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

// ============================================================================
// CURRENCY
// ============================================================================

/// Render a signed decimal as US-dollar currency: two fraction digits,
/// comma thousands separators, negative as "-$X.XX".
///
/// Non-finite input (NaN, ±∞) yields "$0.00"; the substitution is silent to
/// the caller apart from a logged warning.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        warn!(amount, "invalid amount for currency formatting");
        return "$0.00".to_string();
    }

    // -0.0 is not < 0.0, so it renders without a sign.
    let sign = if amount < 0.0 { "-" } else { "" };

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Insert a comma before every group of three digits, counting from the
/// right ("1234567" -> "1,234,567").
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

// ============================================================================
// DATE
// ============================================================================

/// Render an ISO-8601 date or date-time string as "{abbreviated month}
/// {day}, {year}" (e.g. "Jan 15, 2024").
///
/// Unparseable input is returned verbatim (an empty string stays empty),
/// with a logged warning. The calendar date is formatted as written; no
/// timezone conversion is applied.
pub fn format_date(date_string: &str) -> String {
    match parse_calendar_date(date_string) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => {
            warn!(date_string, "invalid date string");
            date_string.to_string()
        }
    }
}

/// Accepts RFC 3339 date-times, bare "YYYY-MM-DDTHH:MM:SS" date-times, and
/// bare "YYYY-MM-DD" dates.
fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

// ============================================================================
// TESTS
// ============================================================================
