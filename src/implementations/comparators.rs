//! Built-in comparators.

use super::LdapComparator;
use super::syntax_checkers::parse_generalized_time;
use std::cmp::Ordering;

/// Lexicographic comparison. Default for matching rules without a comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringComparator;

impl LdapComparator for StringComparator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }
}

/// Numeric comparison of INTEGER values of arbitrary length.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerComparator;

impl LdapComparator for IntegerComparator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        match (parse_integer(left), parse_integer(right)) {
            (Some((l_neg, l_digits)), Some((r_neg, r_digits))) => match (l_neg, r_neg) {
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (false, false) => compare_magnitude(l_digits, r_digits),
                (true, true) => compare_magnitude(r_digits, l_digits),
            },
            _ => left.cmp(right),
        }
    }
}

fn parse_integer(value: &str) -> Option<(bool, &str)> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };
    // -0 sorts as 0
    Some((negative && digits != "0", digits))
}

fn compare_magnitude(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// FALSE sorts before TRUE.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanComparator;

impl LdapComparator for BooleanComparator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        let as_bool = |v: &str| v.trim().eq_ignore_ascii_case("TRUE");
        as_bool(left).cmp(&as_bool(right))
    }
}

/// Chronological comparison of generalized times across time zones.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedTimeComparator;

impl LdapComparator for GeneralizedTimeComparator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        match (parse_generalized_time(left), parse_generalized_time(right)) {
            (Some(l), Some(r)) => l.cmp(&r),
            _ => left.cmp(right),
        }
    }
}
