//! Built-in normalizers.

use super::Normalizer;
use super::syntax_checkers::parse_generalized_time;
use crate::error::{ValueError, ValueResult};
use chrono::Utc;

/// Returns values unchanged. Default for matching rules without a normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNormalizer;

impl Normalizer for NoOpNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        Ok(value.to_string())
    }
}

/// Trims and collapses inner whitespace runs into a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepTrimNormalizer;

impl Normalizer for DeepTrimNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        Ok(deep_trim(value))
    }
}

/// Deep trim followed by lowercasing, for case-ignore matching.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeepTrimToLowerNormalizer;

impl Normalizer for DeepTrimToLowerNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        Ok(deep_trim(value).to_lowercase())
    }
}

/// Removes all whitespace, spaces being insignificant in numeric strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericNormalizer;

impl Normalizer for NumericNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        Ok(value.chars().filter(|c| !c.is_whitespace()).collect())
    }
}

/// Canonicalizes to `TRUE` or `FALSE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanNormalizer;

impl Normalizer for BooleanNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        let upper = value.trim().to_ascii_uppercase();
        match upper.as_str() {
            "TRUE" | "FALSE" => Ok(upper),
            _ => Err(ValueError::invalid_syntax("Boolean", value)),
        }
    }
}

/// Converts generalized times to UTC with millisecond precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralizedTimeNormalizer;

impl Normalizer for GeneralizedTimeNormalizer {
    fn normalize(&self, value: &str) -> ValueResult<String> {
        let time = parse_generalized_time(value.trim())
            .ok_or_else(|| ValueError::invalid_syntax("Generalized Time", value))?;
        Ok(time
            .with_timezone(&Utc)
            .format("%Y%m%d%H%M%S%.3fZ")
            .to_string())
    }
}

fn deep_trim(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
