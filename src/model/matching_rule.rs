//! Matching rule definitions (RFC 4512 section 4.1.3).

use super::SchemaObjectHeader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Definition of a matching rule.
///
/// The normalizer and comparator references are optional; a rule without one
/// normalizes with the no-op normalizer and compares values as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingRule {
    #[serde(flatten)]
    pub header: SchemaObjectHeader,
    /// Assertion syntax
    pub syntax: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<String>,
}

impl MatchingRule {
    pub fn new(oid: impl Into<String>, syntax: impl Into<String>) -> Self {
        Self {
            header: SchemaObjectHeader::new(oid),
            syntax: syntax.into(),
            normalizer: None,
            comparator: None,
        }
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.header.schema_name = schema.into();
        self
    }

    pub fn with_normalizer(mut self, normalizer: impl Into<String>) -> Self {
        self.normalizer = Some(normalizer.into());
        self
    }

    pub fn with_comparator(mut self, comparator: impl Into<String>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }

    pub fn oid(&self) -> &str {
        &self.header.oid
    }
}

/// Role a matching rule plays for an attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchingRuleUsage {
    Equality,
    Ordering,
    Substring,
}

impl fmt::Display for MatchingRuleUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchingRuleUsage::Equality => "Equality",
            MatchingRuleUsage::Ordering => "Ordering",
            MatchingRuleUsage::Substring => "Substring",
        };
        f.write_str(label)
    }
}
