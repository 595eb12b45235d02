//! Formatting utilities for display values.

/// Units used by [`format_size`], starting at kilobytes.
const SIZE_UNITS: [&str; 5] = ["kB", "MB", "GB", "TB", "PB"];

/// Smallest magnitude shown, so tiny files never read as "0.0 kB".
const MIN_DISPLAY_SIZE: f64 = 0.1;

/// Format a byte count for display (e.g., "1.5 kB", "3.2 MB").
///
/// Always divides at least once, so sizes under 1 kB show as a fraction of a
/// kilobyte with a floor of 0.1.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;

    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", value.max(MIN_DISPLAY_SIZE), SIZE_UNITS[unit])
}
