//! UTC offset notation.
//!
//! Accepted forms:
//!
//! ```text
//! -8   +2   5.5   +05:30   UTC   UTC+5:30   GMT-3   utc-03:30
//! ```
//!
//! Parsed offsets are limited to ±14 hours, the widest offsets in civil use.
//! The engine itself accepts anything finite; the limit only guards user input.

use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

pub const MAX_OFFSET_HOURS: f64 = 14.0;

/// Parse an offset string into hours from UTC.
pub fn parse_offset(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    let rest = regex!(r"^(?i)(?:utc|gmt)").replace(trimmed, "");
    let rest = rest.trim();

    if rest.is_empty() {
        return if trimmed.is_empty() { Err(invalid(input)) } else { Ok(0.0) };
    }

    let hours = if let Some(caps) = regex!(r"^([+-])?\s*(\d{1,2})(?::(\d{2}))?$").captures(rest) {
        let sign = if caps.get(1).is_some_and(|m| m.as_str() == "-") { -1.0 } else { 1.0 };
        let whole: f64 = caps[2].parse().map_err(|_| invalid(input))?;
        let minutes: f64 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| invalid(input))?,
            None => 0.0,
        };
        if minutes >= 60.0 {
            return Err(invalid(input));
        }
        sign * (whole + minutes / 60.0)
    } else if regex!(r"^[+-]?\d{1,2}\.\d+$").is_match(rest) {
        rest.parse::<f64>().map_err(|_| invalid(input))?
    } else {
        return Err(invalid(input));
    };

    check_range(hours).map_err(|_| invalid(input))
}

/// Render hours from UTC as `UTC`, `UTC+2`, `UTC-8` or `UTC+5:30`.
pub fn format_offset(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    if total_minutes == 0 {
        return "UTC".to_string();
    }

    let sign = if total_minutes < 0 { '-' } else { '+' };
    let abs = total_minutes.abs();
    match abs % 60 {
        0 => format!("UTC{sign}{}", abs / 60),
        minutes => format!("UTC{sign}{}:{minutes:02}", abs / 60),
    }
}

/// Offset as it may appear in a config file: a bare number or any string form
/// accepted by [`parse_offset`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OffsetRepr {
    Hours(f64),
    Text(String),
}

impl OffsetRepr {
    pub fn hours(&self) -> Result<f64> {
        match self {
            OffsetRepr::Hours(hours) => check_range(*hours),
            OffsetRepr::Text(text) => parse_offset(text),
        }
    }
}

/// `deserialize_with` helper for offset fields.
pub fn deserialize_hours<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    OffsetRepr::deserialize(deserializer)?.hours().map_err(serde::de::Error::custom)
}

fn check_range(hours: f64) -> Result<f64> {
    if hours.is_finite() && hours.abs() <= MAX_OFFSET_HOURS {
        Ok(hours)
    } else {
        Err(Error::InvalidOffset(hours.to_string()))
    }
}

fn invalid(input: &str) -> Error {
    Error::InvalidOffset(format!("'{input}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_accepted_forms() {
        let cases: Vec<(&str, f64)> = vec![
            ("-8", -8.0),
            ("+2", 2.0),
            ("2", 2.0),
            ("5.5", 5.5),
            ("-3.5", -3.5),
            ("+05:30", 5.5),
            ("-03:30", -3.5),
            ("UTC", 0.0),
            ("utc", 0.0),
            ("GMT", 0.0),
            ("UTC+5:30", 5.5),
            ("GMT-3", -3.0),
            ("UTC -8", -8.0),
            ("  +14 ", 14.0),
            ("UTC+05:45", 5.75),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_offset(input).unwrap(), expected, "input {input:?}");
        }
    }

    #[test]
    fn rejects_bad_forms() {
        for input in ["", "  ", "EST", "+5:75", "+15", "-14:30", "UTC+", "8h", "1:2", "+123"] {
            assert!(parse_offset(input).is_err(), "input {input:?} should fail");
        }
    }

    #[test]
    fn formats_offsets() {
        assert_eq!(format_offset(0.0), "UTC");
        assert_eq!(format_offset(-8.0), "UTC-8");
        assert_eq!(format_offset(2.0), "UTC+2");
        assert_eq!(format_offset(5.5), "UTC+5:30");
        assert_eq!(format_offset(-3.5), "UTC-3:30");
        assert_eq!(format_offset(5.75), "UTC+5:45");
    }

    #[test]
    fn repr_validates_numbers_too() {
        assert_eq!(OffsetRepr::Hours(-5.0).hours().unwrap(), -5.0);
        assert!(OffsetRepr::Hours(25.0).hours().is_err());
        assert!(OffsetRepr::Hours(f64::NAN).hours().is_err());
        assert_eq!(OffsetRepr::Text("UTC+1".into()).hours().unwrap(), 1.0);
    }
}
