//! Attribute type definitions (RFC 4512 section 4.1.2).

use super::SchemaObjectHeader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Definition of an attribute type.
///
/// References (`superior`, matching rules, `syntax`) may be given as OIDs or
/// names. Once registered they are stored as canonical OIDs. Unset syntax and
/// matching rules are inherited from the nearest superior defining them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeType {
    #[serde(flatten)]
    pub header: SchemaObjectHeader,
    /// Direct superior attribute type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superior: Option<String>,
    /// Equality matching rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equality: Option<String>,
    /// Ordering matching rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    /// Substring matching rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substring: Option<String>,
    /// Value syntax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<String>,
    /// Upper bound suggested for values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax_length: Option<u32>,
    /// SINGLE-VALUE
    #[serde(default)]
    pub single_valued: bool,
    /// COLLECTIVE
    #[serde(default)]
    pub collective: bool,
    /// False when the type is NO-USER-MODIFICATION
    #[serde(default = "default_user_modifiable")]
    pub user_modifiable: bool,
    /// USAGE
    #[serde(default)]
    pub usage: UsageEnum,
}

fn default_user_modifiable() -> bool {
    true
}

impl AttributeType {
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            header: SchemaObjectHeader::new(oid),
            superior: None,
            equality: None,
            ordering: None,
            substring: None,
            syntax: None,
            syntax_length: None,
            single_valued: false,
            collective: false,
            user_modifiable: true,
            usage: UsageEnum::UserApplications,
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

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.header.description = Some(description.into());
        self
    }

    pub fn with_superior(mut self, superior: impl Into<String>) -> Self {
        self.superior = Some(superior.into());
        self
    }

    pub fn with_equality(mut self, rule: impl Into<String>) -> Self {
        self.equality = Some(rule.into());
        self
    }

    pub fn with_ordering(mut self, rule: impl Into<String>) -> Self {
        self.ordering = Some(rule.into());
        self
    }

    pub fn with_substring(mut self, rule: impl Into<String>) -> Self {
        self.substring = Some(rule.into());
        self
    }

    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    pub fn single_valued(mut self, single_valued: bool) -> Self {
        self.single_valued = single_valued;
        self
    }

    pub fn collective(mut self, collective: bool) -> Self {
        self.collective = collective;
        self
    }

    pub fn user_modifiable(mut self, user_modifiable: bool) -> Self {
        self.user_modifiable = user_modifiable;
        self
    }

    pub fn with_usage(mut self, usage: UsageEnum) -> Self {
        self.usage = usage;
        self
    }

    pub fn oid(&self) -> &str {
        &self.header.oid
    }

    /// Operational attributes are those with any usage other than userApplications.
    pub fn is_operational(&self) -> bool {
        self.usage.is_operational()
    }
}

/// Attribute type USAGE values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageEnum {
    #[default]
    #[serde(rename = "userApplications")]
    UserApplications,
    #[serde(rename = "directoryOperation")]
    DirectoryOperation,
    #[serde(rename = "distributedOperation")]
    DistributedOperation,
    #[serde(rename = "dSAOperation", alias = "dsaOperation")]
    DsaOperation,
}

impl UsageEnum {
    pub fn is_operational(&self) -> bool {
        !matches!(self, UsageEnum::UserApplications)
    }
}

impl fmt::Display for UsageEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            UsageEnum::UserApplications => "userApplications",
            UsageEnum::DirectoryOperation => "directoryOperation",
            UsageEnum::DistributedOperation => "distributedOperation",
            UsageEnum::DsaOperation => "dSAOperation",
        };
        f.write_str(keyword)
    }
}
