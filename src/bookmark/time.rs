//! Conversion between microsecond offsets and `HH:MM:SS` text.

use thiserror::Error;

/// Microseconds per second.
pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Error returned when time text does not have one, two or three fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("Invalid string format for time: expected S, M:S or H:M:S, got {0} field(s)")]
    FieldCount(usize),
}

/// Formats a microsecond offset as zero-padded `HH:MM:SS`.
///
/// Sub-second precision is truncated.
///
/// ```
/// use seekquill::bookmark::time::format_time;
///
/// assert_eq!(format_time(0), "00:00:00");
/// assert_eq!(format_time(3_661_000_000), "01:01:01");
/// assert_eq!(format_time(90_500_000), "00:01:30");
/// ```
pub fn format_time(time_offset: i64) -> String {
    let total = time_offset / MICROS_PER_SECOND;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parses `S`, `M:S` or `H:M:S` into microseconds.
///
/// Empty fragments between separators are discarded, so `"1::30"` reads as
/// two fields. A field that is not an integer counts as 0.
///
/// ```
/// use seekquill::bookmark::time::parse_time;
///
/// assert_eq!(parse_time("90"), Ok(90_000_000));
/// assert_eq!(parse_time("1:30"), Ok(90_000_000));
/// assert!(parse_time("1:2:3:4").is_err());
/// ```
pub fn parse_time(text: &str) -> Result<i64, TimeFormatError> {
    let fields: Vec<i64> = text
        .split(':')
        .filter(|fragment| !fragment.is_empty())
        .map(parse_field)
        .collect();

    let total_seconds = match fields.as_slice() {
        [s] => *s,
        [m, s] => m.saturating_mul(60).saturating_add(*s),
        [h, m, s] => h
            .saturating_mul(3600)
            .saturating_add(m.saturating_mul(60))
            .saturating_add(*s),
        other => return Err(TimeFormatError::FieldCount(other.len())),
    };

    Ok(total_seconds.saturating_mul(MICROS_PER_SECOND))
}

fn parse_field(fragment: &str) -> i64 {
    fragment.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_each_field() {
        assert_eq!(format_time(5_000_000), "00:00:05");
        assert_eq!(format_time(65_000_000), "00:01:05");
        assert_eq!(format_time(36_000_000_000), "10:00:00");
    }

    #[test]
    fn test_format_hours_past_two_digits() {
        assert_eq!(format_time(360_000 * MICROS_PER_SECOND), "100:00:00");
    }

    #[test]
    fn test_parse_seconds_only() {
        assert_eq!(parse_time("90"), Ok(90_000_000));
    }

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_time("1:30"), Ok(90_000_000));
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(parse_time("0:1:30"), Ok(90_000_000));
        assert_eq!(parse_time("1:31:30"), Ok(5_490_000_000));
    }

    #[test]
    fn test_parse_skips_empty_fragments() {
        assert_eq!(parse_time(":1::30:"), Ok(90_000_000));
    }

    #[test]
    fn test_parse_non_numeric_field_is_zero() {
        assert_eq!(parse_time("x:30"), Ok(30_000_000));
        assert_eq!(parse_time(" 2 : 5 "), Ok(125_000_000));
    }

    #[test]
    fn test_parse_rejects_four_fields() {
        assert_eq!(parse_time("1:2:3:4"), Err(TimeFormatError::FieldCount(4)));
    }

    #[test]
    fn test_parse_rejects_empty_text() {
        assert_eq!(parse_time(""), Err(TimeFormatError::FieldCount(0)));
        assert_eq!(parse_time(":::"), Err(TimeFormatError::FieldCount(0)));
    }

    #[test]
    fn test_format_of_parsed_value() {
        let parsed = parse_time("01:01:01").unwrap();
        assert_eq!(format_time(parsed), "01:01:01");
    }
}
