use std::time::Duration;

/// Format an elapsed duration as a compact string such as `1h2m3s`.
///
/// Zero components are omitted. Durations under one second render as `0s`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (minutes, seconds) = (total / 60, total % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);

    let formatted: String = [(days, 'd'), (hours, 'h'), (minutes, 'm'), (seconds, 's')]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if formatted.is_empty() {
        "0s".to_string()
    } else {
        formatted
    }
}
