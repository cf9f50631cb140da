//! Object class definitions (RFC 4512 section 4.1.1).

use super::SchemaObjectHeader;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Definition of an object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectClass {
    #[serde(flatten)]
    pub header: SchemaObjectHeader,
    #[serde(default)]
    pub kind: ObjectClassKind,
    /// Direct superior classes
    #[serde(default)]
    pub superiors: Vec<String>,
    /// Required attribute types
    #[serde(default)]
    pub must: Vec<String>,
    /// Allowed attribute types
    #[serde(default)]
    pub may: Vec<String>,
}

impl ObjectClass {
    pub fn new(oid: impl Into<String>) -> Self {
        Self {
            header: SchemaObjectHeader::new(oid),
            kind: ObjectClassKind::Structural,
            superiors: Vec::new(),
            must: Vec::new(),
            may: Vec::new(),
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

    pub fn with_kind(mut self, kind: ObjectClassKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_superiors<I, S>(mut self, superiors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.superiors = superiors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_must<I, S>(mut self, must: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must = must.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_may<I, S>(mut self, may: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.may = may.into_iter().map(Into::into).collect();
        self
    }

    pub fn oid(&self) -> &str {
        &self.header.oid
    }
}

/// Object class kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectClassKind {
    #[default]
    Structural,
    Abstract,
    Auxiliary,
}

impl ObjectClassKind {
    /// Superior kinds allowed for a class of this kind.
    ///
    /// Abstract classes only derive from abstract classes, structural classes
    /// never derive from auxiliary ones and auxiliary classes never derive from
    /// structural ones.
    pub fn can_inherit_from(&self, superior: ObjectClassKind) -> bool {
        match self {
            ObjectClassKind::Abstract => superior == ObjectClassKind::Abstract,
            ObjectClassKind::Structural => superior != ObjectClassKind::Auxiliary,
            ObjectClassKind::Auxiliary => superior != ObjectClassKind::Structural,
        }
    }
}

impl fmt::Display for ObjectClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            ObjectClassKind::Structural => "STRUCTURAL",
            ObjectClassKind::Abstract => "ABSTRACT",
            ObjectClassKind::Auxiliary => "AUXILIARY",
        };
        f.write_str(keyword)
    }
}
