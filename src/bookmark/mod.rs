//! Bookmark (seek point) data exchanged with the input controller.
//!
//! A [`SeekPoint`] is a plain value: the controller hands out copies of its
//! list, the panel mutates a copy and submits it back. Nothing in this module
//! keeps state between calls.
//!
//! # Example
//!
//! ```
//! use seekquill::bookmark::{SeekPoint, time::format_time};
//!
//! let point = SeekPoint::new("intro", 1024, 3_661_000_000);
//! assert_eq!(format_time(point.time_offset), "01:01:01");
//! ```

pub mod time;

use serde::{Deserialize, Serialize};

/// A named, byte-and-time-addressable position within a media stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekPoint {
    /// Description shown in the first column.
    #[serde(default)]
    pub name: String,
    /// Offset into the stream in bytes.
    #[serde(default)]
    pub byte_offset: u64,
    /// Offset into the stream in microseconds.
    #[serde(default)]
    pub time_offset: i64,
}

impl SeekPoint {
    /// Creates a seek point from its three fields.
    pub fn new(name: impl Into<String>, byte_offset: u64, time_offset: i64) -> Self {
        Self {
            name: name.into(),
            byte_offset,
            time_offset,
        }
    }
}

/// Largest byte offset a bookmark can hold.
///
/// Bookmark files store offsets as TOML integers, which are signed 64-bit.
pub const MAX_BYTE_OFFSET: u64 = i64::MAX as u64;

/// Parses a byte offset from the integer prefix of `text`.
///
/// Leading whitespace is skipped, an optional sign is accepted and digits are
/// read until the first non-digit. Text with no leading digits, and negative
/// values, yield 0. Values past [`MAX_BYTE_OFFSET`] are capped.
///
/// ```
/// use seekquill::bookmark::parse_byte_offset;
///
/// assert_eq!(parse_byte_offset("4096"), 4096);
/// assert_eq!(parse_byte_offset("  12kb"), 12);
/// assert_eq!(parse_byte_offset("abc"), 0);
/// assert_eq!(parse_byte_offset("-5"), 0);
/// ```
pub fn parse_byte_offset(text: &str) -> u64 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: u64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(u64::from(b - b'0'))
            .min(MAX_BYTE_OFFSET);
    }

    if negative {
        0
    } else {
        value
    }
}
