use crate::{Error, Result};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

fn unit(count: u64, singular: &'static str) -> String {
    if count < 2 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}

/// Readable form of a whole number of seconds,
/// e.g. `"1 hour 0 minute 5 seconds "`.
///
/// Leading zero units are dropped, everything after the first non-zero unit
/// is kept. Counts below two use the singular. The trailing space is part
/// of the format.
pub fn readable_duration_secs(total: u64) -> String {
    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;

    let parts = [
        (days, unit(days, "day")),
        (hours, unit(hours, "hour")),
        (minutes, unit(minutes, "minute")),
        (seconds, unit(seconds, "second")),
    ];
    let first = parts[..3]
        .iter()
        .position(|(count, _)| *count > 0)
        .unwrap_or(3);

    let mut result = String::new();
    for (count, name) in &parts[first..] {
        result.push_str(&format!("{count} {name} "));
    }
    result
}

/// Readable form of a [`std::time::Duration`]; sub-second parts are dropped.
pub fn readable_duration(duration: std::time::Duration) -> String {
    readable_duration_secs(duration.as_secs())
}

/// Readable form of a floating point seconds count, e.g. a wall clock delta.
pub fn readable_seconds(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::InvalidDuration(seconds));
    }
    Ok(readable_duration_secs(seconds.trunc() as u64))
}
