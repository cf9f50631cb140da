//! Descriptors for normalizers, comparators and syntax checkers.

use super::SchemaObjectHeader;
use serde::{Deserialize, Serialize};

/// A schema object backed by a pluggable implementation.
///
/// `implementation` is the identifier looked up in the
/// [`ImplementationFactory`](crate::implementations::ImplementationFactory).
/// The same descriptor shape is used for normalizers, comparators and syntax
/// checkers; the [`SchemaObject`](super::SchemaObject) variant decides which
/// capability the identifier must provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationDescription {
    #[serde(flatten)]
    pub header: SchemaObjectHeader,
    pub implementation: String,
}

impl ImplementationDescription {
    pub fn new(oid: impl Into<String>, implementation: impl Into<String>) -> Self {
        Self {
            header: SchemaObjectHeader::new(oid),
            implementation: implementation.into(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.header.schema_name = schema.into();
        self
    }

    pub fn oid(&self) -> &str {
        &self.header.oid
    }
}
