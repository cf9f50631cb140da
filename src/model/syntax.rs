//! LDAP syntax definitions (RFC 4512 section 4.1.5).

use super::SchemaObjectHeader;
use serde::{Deserialize, Serialize};

/// Definition of an LDAP syntax.
///
/// Without a syntax checker reference every value is accepted, as with the
/// octet string syntax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapSyntax {
    #[serde(flatten)]
    pub header: SchemaObjectHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax_checker: Option<String>,
    /// False for X-NOT-HUMAN-READABLE syntaxes
    #[serde(default = "default_human_readable")]
    pub human_readable: bool,
}

fn default_human_readable() -> bool {
    true
}

impl LdapSyntax {
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            header: SchemaObjectHeader::new(oid),
            syntax_checker: None,
            human_readable: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.header.description = Some(description.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.header.schema_name = schema.into();
        self
    }

    pub fn with_syntax_checker(mut self, checker: impl Into<String>) -> Self {
        self.syntax_checker = Some(checker.into());
        self
    }

    pub fn oid(&self) -> &str {
        &self.header.oid
    }
}
