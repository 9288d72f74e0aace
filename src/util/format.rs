//! Display formatting for deal values and due dates.
//!
//! Values arrive as plain numbers and dates as ISO-8601 strings; both are
//! display-only here, so no currency or date crate is involved.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a deal value as a dollar amount with thousands separators,
/// e.g. `12500.0` -> `"$12,500"`. Fractional cents are dropped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn usd(value: f64) -> String {
    let negative = value < 0.0;
    let whole = value.abs().trunc() as u64;
    let digits = whole.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Trim an ISO-8601 timestamp to its date part, e.g.
/// `"2025-03-01T09:00:00Z"` -> `"2025-03-01"`. Strings without a time
/// component pass through unchanged.
pub fn date_only(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
