//! Session length parsing.
//!
//! Lengths are written as a run of `<number><unit>` terms, e.g. `1h30m`,
//! `90m` or `1.5h`. Supported units are `ns`, `us` (`µs`), `ms`, `s`, `m`, `h`.

use crate::error::DurationError;
use chrono::Duration;

const NANOS_PER_SECOND: f64 = 1e9;

fn unit_nanos(unit: &str) -> Option<f64> {
    let nanos = match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => NANOS_PER_SECOND,
        "m" => 60.0 * NANOS_PER_SECOND,
        "h" => 3600.0 * NANOS_PER_SECOND,
        _ => return None,
    };
    Some(nanos)
}

/// Parse a session length such as `"1h30m"` into a `Duration`
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    let trimmed = input.trim();
    let mut rest = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if rest.starts_with('-') {
        return Err(DurationError::new(input, "session length cannot be negative"));
    }
    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::new(input, "empty duration"));
    }

    let mut total_nanos = 0.0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." {
            return Err(DurationError::new(input, "expected a number"));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| DurationError::new(input, format!("invalid number {:?}", number)))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let scale = match unit_nanos(unit) {
            Some(scale) => scale,
            None if unit.is_empty() => {
                return Err(DurationError::new(input, "missing unit"));
            }
            None => {
                return Err(DurationError::new(input, format!("unknown unit {:?}", unit)));
            }
        };

        total_nanos += value * scale;
        rest = tail;
    }

    if total_nanos > i64::MAX as f64 {
        return Err(DurationError::new(input, "duration out of range"));
    }
    Ok(Duration::nanoseconds(total_nanos.round() as i64))
}

/// Length of a duration in fractional hours
pub fn as_hours(duration: &Duration) -> f64 {
    duration.num_milliseconds() as f64 / 3_600_000.0
}
