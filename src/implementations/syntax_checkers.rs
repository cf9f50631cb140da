//! Built-in syntax checkers (RFC 4517 value syntaxes).

use super::SyntaxChecker;
use crate::model::oid::{is_descr, is_numeric_oid, is_oid_or_descr};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone};
use uuid::Uuid;

/// Accepts every value. Default for syntaxes without a checker.
#[derive(Debug, Clone, Copy, Default)]
pub struct OctetStringSyntaxChecker;

impl SyntaxChecker for OctetStringSyntaxChecker {
    fn is_valid_syntax(&self, _value: &str) -> bool {
        true
    }
}

/// `TRUE` or `FALSE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSyntaxChecker;

impl SyntaxChecker for BooleanSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        value == "TRUE" || value == "FALSE"
    }
}

/// Optional minus sign followed by digits without leading zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSyntaxChecker;

impl SyntaxChecker for IntegerSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        match digits.as_bytes() {
            [] => false,
            [b'0'] => !negative,
            [b'0', ..] => false,
            bytes => bytes.iter().all(u8::is_ascii_digit),
        }
    }
}

/// Any non-empty UTF-8 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryStringSyntaxChecker;

impl SyntaxChecker for DirectoryStringSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// International Alphabet 5 (ASCII) strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ia5StringSyntaxChecker;

impl SyntaxChecker for Ia5StringSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        value.is_ascii()
    }
}

/// Non-empty strings of PrintableCharacter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintableStringSyntaxChecker;

impl SyntaxChecker for PrintableStringSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "'()+,-./:?= ".contains(c))
    }
}

/// Non-empty strings of digits and spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericStringSyntaxChecker;

impl SyntaxChecker for NumericStringSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| c.is_ascii_digit() || c == ' ')
    }
}

/// Numeric OID or descriptor.
#[derive(Debug, Clone, Copy, Default)]
pub struct OidSyntaxChecker;

impl SyntaxChecker for OidSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        is_oid_or_descr(value)
    }
}

/// Distinguished names in RFC 4514 string form.
///
/// Checks the RDN structure and attribute descriptions; attribute values are
/// not interpreted beyond escape handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnSyntaxChecker;

impl SyntaxChecker for DnSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }

        split_unescaped(value, ',').iter().all(|rdn| {
            split_unescaped(rdn, '+').iter().all(|ava| {
                let Some((attribute, _)) = ava.split_once('=') else {
                    return false;
                };
                let attribute = attribute.trim();
                is_descr(attribute) || is_numeric_oid(attribute)
            })
        })
    }
}

fn split_unescaped(value: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in value.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            current.push(c);
            escaped = true;
        } else if c == separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);
    parts
}

/// Generalized Time (`YYYYMMDDHH[MM[SS]][.fraction](Z|±HH[MM])`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedTimeSyntaxChecker;

impl SyntaxChecker for GeneralizedTimeSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        parse_generalized_time(value).is_some()
    }
}

/// UUIDs in the 36 character hyphenated form (RFC 4530).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSyntaxChecker;

impl SyntaxChecker for UuidSyntaxChecker {
    fn is_valid_syntax(&self, value: &str) -> bool {
        value.len() == 36 && Uuid::parse_str(value).is_ok()
    }
}

/// Parse a Generalized Time value.
///
/// A fraction applies to the least significant unit present, so
/// `2024010215.5Z` is half past three.
pub(crate) fn parse_generalized_time(value: &str) -> Option<DateTime<FixedOffset>> {
    if !value.is_ascii() {
        return None;
    }

    let (body, offset) = if let Some(body) = value.strip_suffix('Z') {
        (body, FixedOffset::east_opt(0)?)
    } else {
        let position = value.rfind(['+', '-'])?;
        let (body, zone) = value.split_at(position);
        (body, parse_offset(zone)?)
    };

    let (digits, fraction) = match body.find(['.', ',']) {
        Some(position) => (&body[..position], Some(&body[position + 1..])),
        None => (body, None),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let field = |range: std::ops::Range<usize>| digits.get(range)?.parse::<u32>().ok();
    let (year, month, day, hour) = (field(0..4)?, field(4..6)?, field(6..8)?, field(8..10)?);
    let (minute, second, unit_seconds) = match digits.len() {
        10 => (0, 0, 3600),
        12 => (field(10..12)?, 0, 60),
        14 => (field(10..12)?, field(12..14)?, 1),
        _ => return None,
    };

    let naive = NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(hour, minute, second)?;
    let mut time = offset.from_local_datetime(&naive).single()?;

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut nanos_digits: String = fraction.chars().take(9).collect();
        while nanos_digits.len() < 9 {
            nanos_digits.push('0');
        }
        let nanos: i64 = nanos_digits.parse().ok()?;
        time = time + Duration::nanoseconds(nanos * unit_seconds);
    }

    Some(time)
}

fn parse_offset(zone: &str) -> Option<FixedOffset> {
    let sign = match zone.as_bytes().first()? {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let digits = &zone[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes): (i32, i32) = match digits.len() {
        2 => (digits.parse().ok()?, 0),
        4 => (digits[..2].parse().ok()?, digits[2..].parse().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
