//! Compound-unit duration parsing (`40m`, `1h20m`, `-1.5h`, `250ms`).
//!
//! Accepts an optional sign followed by one or more `<number><unit>`
//! components. Numbers may carry a decimal fraction. Recognized units are
//! `ns`, `us` (also `µs`/`μs`), `ms`, `s`, `m` and `h`. A bare number is
//! rejected, `0` included.

use std::sync::LazyLock;

use chrono::TimeDelta;
use regex::Regex;
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits past this precision cannot change a nanosecond count.
const MAX_FRACTION_DIGITS: usize = 18;

static COMPONENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]*)(?:\.([0-9]*))?([^0-9.]+)").expect("duration component regex is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("invalid duration {0:?}")]
    Invalid(String),
    #[error("duration {0:?} out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parse a signed compound-unit duration.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        Some(_) => (false, input),
        None => return Err(DurationError::Empty),
    };
    if body.is_empty() {
        return Err(DurationError::Invalid(input.to_string()));
    }

    let mut total: u128 = 0;
    let mut cursor = 0;
    for caps in COMPONENT.captures_iter(body) {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        if whole.start != cursor {
            break;
        }
        cursor = whole.end;

        let int_part = caps.get(1).map_or("", |m| m.as_str());
        let frac_part = caps.get(2).map_or("", |m| m.as_str());
        let unit = caps.get(3).map_or("", |m| m.as_str());
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(DurationError::Invalid(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        total = int_part
            .parse::<u64>()
            .ok()
            .or(int_part.is_empty().then_some(0))
            .and_then(|int| u128::from(int).checked_mul(scale))
            .and_then(|nanos| nanos.checked_add(fraction_nanos(frac_part, scale)))
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(|| DurationError::Overflow(input.to_string()))?;
    }

    if cursor != body.len() {
        let rest = &body[cursor..];
        return Err(if rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            DurationError::MissingUnit(input.to_string())
        } else {
            DurationError::Invalid(input.to_string())
        });
    }

    let limit = if negative {
        i64::MAX as u128 + 1
    } else {
        i64::MAX as u128
    };
    if total > limit {
        return Err(DurationError::Overflow(input.to_string()));
    }
    let nanos = if negative {
        (total as i128).wrapping_neg() as i64
    } else {
        total as i64
    };
    Ok(TimeDelta::nanoseconds(nanos))
}

fn fraction_nanos(digits: &str, scale: u128) -> u128 {
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    if digits.is_empty() {
        return 0;
    }
    let numerator: u128 = digits.parse().unwrap_or(0);
    numerator * scale / 10u128.pow(digits.len() as u32)
}

/// Length of a duration in fractional hours; negative spans stay negative.
pub fn hours(duration: TimeDelta) -> f64 {
    let seconds = duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9;
    seconds / 3600.0
}
