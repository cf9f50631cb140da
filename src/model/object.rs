//! Common header and the tagged union of all schema object kinds.

use super::{AttributeType, ImplementationDescription, LdapSyntax, MatchingRule, ObjectClass};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identity and descriptive fields shared by every schema object.
///
/// The first entry of `names` is the canonical ("up") name, the others are
/// aliases. Name comparisons are case-insensitive, OID comparisons are exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObjectHeader {
    /// Dotted-decimal object identifier
    pub oid: String,
    /// Canonical name followed by aliases
    #[serde(default)]
    pub names: Vec<String>,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the object is marked OBSOLETE
    #[serde(default)]
    pub obsolete: bool,
    /// Name of the schema this object belongs to
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema_name: String,
    /// X- extensions keyed by extension name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Vec<String>>,
}

impl SchemaObjectHeader {
    /// Create a header with only an OID set.
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            ..Default::default()
        }
    }

    /// The canonical name, if the object has any name.
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// The canonical name, falling back to the OID.
    pub fn name_or_oid(&self) -> &str {
        self.name().unwrap_or(&self.oid)
    }

    /// Case-insensitive check against all names.
    pub fn has_name(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// True when `id` is this object's OID or one of its names.
    pub fn is_identified_by(&self, id: &str) -> bool {
        self.oid == id || self.has_name(id)
    }
}

/// The seven kinds of schema objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectKind {
    AttributeType,
    ObjectClass,
    MatchingRule,
    Normalizer,
    Comparator,
    SyntaxChecker,
    LdapSyntax,
}

impl ObjectKind {
    /// All kinds in registration order: implementations first, object classes last.
    pub const REGISTRATION_ORDER: [ObjectKind; 7] = [
        ObjectKind::SyntaxChecker,
        ObjectKind::Normalizer,
        ObjectKind::Comparator,
        ObjectKind::LdapSyntax,
        ObjectKind::MatchingRule,
        ObjectKind::AttributeType,
        ObjectKind::ObjectClass,
    ];
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObjectKind::AttributeType => "attribute type",
            ObjectKind::ObjectClass => "object class",
            ObjectKind::MatchingRule => "matching rule",
            ObjectKind::Normalizer => "normalizer",
            ObjectKind::Comparator => "comparator",
            ObjectKind::SyntaxChecker => "syntax checker",
            ObjectKind::LdapSyntax => "syntax",
        };
        f.write_str(label)
    }
}

/// Any schema object submitted to the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaObject {
    AttributeType(AttributeType),
    ObjectClass(ObjectClass),
    MatchingRule(MatchingRule),
    Normalizer(ImplementationDescription),
    Comparator(ImplementationDescription),
    SyntaxChecker(ImplementationDescription),
    LdapSyntax(LdapSyntax),
}

impl SchemaObject {
    pub fn header(&self) -> &SchemaObjectHeader {
        match self {
            SchemaObject::AttributeType(at) => &at.header,
            SchemaObject::ObjectClass(oc) => &oc.header,
            SchemaObject::MatchingRule(mr) => &mr.header,
            SchemaObject::Normalizer(d) | SchemaObject::Comparator(d) | SchemaObject::SyntaxChecker(d) => {
                &d.header
            }
            SchemaObject::LdapSyntax(s) => &s.header,
        }
    }

    pub fn header_mut(&mut self) -> &mut SchemaObjectHeader {
        match self {
            SchemaObject::AttributeType(at) => &mut at.header,
            SchemaObject::ObjectClass(oc) => &mut oc.header,
            SchemaObject::MatchingRule(mr) => &mut mr.header,
            SchemaObject::Normalizer(d) | SchemaObject::Comparator(d) | SchemaObject::SyntaxChecker(d) => {
                &mut d.header
            }
            SchemaObject::LdapSyntax(s) => &mut s.header,
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            SchemaObject::AttributeType(_) => ObjectKind::AttributeType,
            SchemaObject::ObjectClass(_) => ObjectKind::ObjectClass,
            SchemaObject::MatchingRule(_) => ObjectKind::MatchingRule,
            SchemaObject::Normalizer(_) => ObjectKind::Normalizer,
            SchemaObject::Comparator(_) => ObjectKind::Comparator,
            SchemaObject::SyntaxChecker(_) => ObjectKind::SyntaxChecker,
            SchemaObject::LdapSyntax(_) => ObjectKind::LdapSyntax,
        }
    }

    pub fn oid(&self) -> &str {
        &self.header().oid
    }

    /// Wrap a descriptor as a normalizer.
    pub fn normalizer(description: ImplementationDescription) -> Self {
        SchemaObject::Normalizer(description)
    }

    /// Wrap a descriptor as a comparator.
    pub fn comparator(description: ImplementationDescription) -> Self {
        SchemaObject::Comparator(description)
    }

    /// Wrap a descriptor as a syntax checker.
    pub fn syntax_checker(description: ImplementationDescription) -> Self {
        SchemaObject::SyntaxChecker(description)
    }
}

impl From<AttributeType> for SchemaObject {
    fn from(value: AttributeType) -> Self {
        SchemaObject::AttributeType(value)
    }
}

impl From<ObjectClass> for SchemaObject {
    fn from(value: ObjectClass) -> Self {
        SchemaObject::ObjectClass(value)
    }
}

impl From<MatchingRule> for SchemaObject {
    fn from(value: MatchingRule) -> Self {
        SchemaObject::MatchingRule(value)
    }
}

impl From<LdapSyntax> for SchemaObject {
    fn from(value: LdapSyntax) -> Self {
        SchemaObject::LdapSyntax(value)
    }
}
