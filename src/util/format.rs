//! Display formatting helpers for sizes and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Human-readable byte count: `0 Bytes`, `1.5 KB`, `2 MB`, ...
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rendered = format!("{value:.2}");
    let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Date part of a service timestamp (`2024-05-27T10:00:00Z` → `2024-05-27`).
/// Values without a date shape render as an em-width placeholder.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let date = raw.split('T').next().unwrap_or_default();
    if date.len() == 10 && date.chars().all(|c| c.is_ascii_digit() || c == '-') {
        date.to_owned()
    } else {
        "—".to_owned()
    }
}
