//! Display helpers shared by every screen.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%-d %b %Y %H:%M";

/// Render a backend timestamp for display.
///
/// The backend emits naive ISO timestamps (`2024-11-02T08:15:00.123456`),
/// sometimes with an offset. Anything unparseable is shown as-is; a missing
/// value renders as `-`.
pub fn format_timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    for pattern in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

/// `count / total` as a percentage with one decimal; `"0.0"` for an empty total.
pub fn percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", count as f64 / total as f64 * 100.0)
}

pub fn format_probability(probability: f64) -> String {
    format!("{probability:.1}%")
}

/// Optional measurement with a unit, `-` when absent.
pub fn format_measure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{v:.1}"),
        Some(v) => format!("{v:.1} {unit}"),
        None => "-".to_string(),
    }
}
