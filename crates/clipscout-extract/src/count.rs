//! Engagement count parsing for informal display notation.
//!
//! Platforms render counts as `"1.2万"`, `"3.4w"`, `"12k"` or `"1,024"`.
//! Everything funnels through [`parse_count`], which never fails: any value it
//! cannot read becomes `0`.

use crate::types::RawCount;

/// Magnitude suffixes in precedence order. The first suffix found anywhere in
/// the string wins, and every marker in its group is stripped before parsing.
const MAGNITUDES: &[(&[char], f64)] = &[
    (&['亿'], 100_000_000.0),
    (&['万', 'w'], 10_000.0),
    (&['k'], 1_000.0),
];

/// Converts a raw count into a non-negative integer.
///
/// - `None` → `0`
/// - integers pass through, negatives clamp to `0`
/// - floats are truncated toward zero
/// - text is lowercased, trimmed and stripped of `,` before suffix handling
///
/// Unparseable input returns `0`.
#[must_use]
pub fn parse_count(value: Option<&RawCount>) -> u64 {
    match value {
        None => 0,
        Some(RawCount::Integer(n)) => u64::try_from(*n).unwrap_or(0),
        Some(RawCount::Float(f)) => truncate(*f),
        Some(RawCount::Text(s)) => parse_count_text(s),
    }
}

/// Parses the textual form of a count, e.g. `"2.5万"` → `25000`.
#[must_use]
pub fn parse_count_text(raw: &str) -> u64 {
    let normalized = raw.to_lowercase().trim().replace(',', "");

    for (markers, multiplier) in MAGNITUDES {
        if normalized.contains(*markers) {
            let base: String = normalized.chars().filter(|c| !markers.contains(c)).collect();
            return base
                .trim()
                .parse::<f64>()
                .map_or(0, |b| truncate(b * multiplier));
        }
    }

    normalized.parse::<f64>().map_or(0, truncate)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.trunc() as u64
    } else {
        0
    }
}

#[cfg(test)]
#[path = "count_test.rs"]
mod tests;
