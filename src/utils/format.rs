//! Formatting utilities for file sizes, dates, and other display values.

/// Format a byte count for display (e.g., "500 B", "1.5 KB", "3.4 MB").
///
/// Uses decimal units, matching what the upload API reports.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1_000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1_000.0;
    let mut unit = 0;
    while value >= 1_000.0 && unit < UNITS.len() - 1 {
        value /= 1_000.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Format an RFC 3339 timestamp as an ISO date (YYYY-MM-DD).
///
/// Falls back to the input when it is too short to contain a date.
pub fn format_date(timestamp: &str) -> String {
    match timestamp.get(..10) {
        Some(date) if date.as_bytes().get(4) == Some(&b'-') => date.to_string(),
        _ => timestamp.to_string(),
    }
}

/// "1 file" / "3 files".
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
