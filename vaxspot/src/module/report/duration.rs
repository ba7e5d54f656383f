use chrono::Duration;

const PERIODS: [(&str, i64); 6] = [
    ("year", 60 * 60 * 24 * 365),
    ("month", 60 * 60 * 24 * 30),
    ("day", 60 * 60 * 24),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Human readable "ago" text, e.g. `"1 hour, 1 minute"`.
///
/// Fractional seconds are truncated. A unit is only used when the remaining
/// seconds strictly exceed its length, so exactly 60s renders as
/// `"60 seconds"` and anything up to 1s renders as an empty string.
pub fn format_duration(duration: Duration) -> String {
    let mut seconds = duration.num_seconds();
    let mut parts = Vec::new();

    for (name, period) in PERIODS {
        if seconds > period {
            let value = seconds / period;
            seconds %= period;
            let plural = if value == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", value, name, plural));
        }
    }

    parts.join(", ")
}
