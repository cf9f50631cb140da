//! The loader abstraction and the per-schema object bundle.

use super::Schema;
use crate::error::SchemaResult;
use crate::model::{
    AttributeType, ImplementationDescription, LdapSyntax, MatchingRule, ObjectClass, ObjectKind,
    SchemaObject,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source of schema descriptors and their objects.
///
/// The manager only ever reads through this trait; it never writes back.
pub trait SchemaLoader: fmt::Debug + Send + Sync {
    /// Descriptor of the schema with this name (case-insensitive).
    fn schema(&self, name: &str) -> Option<Schema>;

    /// Descriptors of every schema the loader knows.
    fn all_schemas(&self) -> Vec<Schema>;

    /// Objects belonging to a schema, each stamped with the schema name.
    fn load_schema_objects(&self, schema: &Schema) -> SchemaResult<SchemaObjects>;
}

/// Objects of one schema, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaObjects {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syntax_checkers: Vec<ImplementationDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub normalizers: Vec<ImplementationDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparators: Vec<ImplementationDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syntaxes: Vec<LdapSyntax>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matching_rules: Vec<MatchingRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_types: Vec<AttributeType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub object_classes: Vec<ObjectClass>,
}

impl SchemaObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of objects.
    pub fn len(&self) -> usize {
        ObjectKind::REGISTRATION_ORDER
            .iter()
            .map(|kind| self.count(*kind))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of objects of one kind.
    pub fn count(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::SyntaxChecker => self.syntax_checkers.len(),
            ObjectKind::Normalizer => self.normalizers.len(),
            ObjectKind::Comparator => self.comparators.len(),
            ObjectKind::LdapSyntax => self.syntaxes.len(),
            ObjectKind::MatchingRule => self.matching_rules.len(),
            ObjectKind::AttributeType => self.attribute_types.len(),
            ObjectKind::ObjectClass => self.object_classes.len(),
        }
    }

    /// Append an object to the group of its kind.
    pub fn push(&mut self, object: SchemaObject) {
        match object {
            SchemaObject::SyntaxChecker(d) => self.syntax_checkers.push(d),
            SchemaObject::Normalizer(d) => self.normalizers.push(d),
            SchemaObject::Comparator(d) => self.comparators.push(d),
            SchemaObject::LdapSyntax(s) => self.syntaxes.push(s),
            SchemaObject::MatchingRule(mr) => self.matching_rules.push(mr),
            SchemaObject::AttributeType(at) => self.attribute_types.push(at),
            SchemaObject::ObjectClass(oc) => self.object_classes.push(oc),
        }
    }

    /// Remove the object with this OID, whatever its kind.
    pub fn remove(&mut self, oid: &str) -> bool {
        let before = self.len();
        self.syntax_checkers.retain(|d| d.header.oid != oid);
        self.normalizers.retain(|d| d.header.oid != oid);
        self.comparators.retain(|d| d.header.oid != oid);
        self.syntaxes.retain(|s| s.header.oid != oid);
        self.matching_rules.retain(|mr| mr.header.oid != oid);
        self.attribute_types.retain(|at| at.header.oid != oid);
        self.object_classes.retain(|oc| oc.header.oid != oid);
        self.len() != before
    }

    /// Set the owning schema of every object.
    pub fn set_schema_name(&mut self, name: &str) {
        let headers = self
            .syntax_checkers
            .iter_mut()
            .map(|d| &mut d.header)
            .chain(self.normalizers.iter_mut().map(|d| &mut d.header))
            .chain(self.comparators.iter_mut().map(|d| &mut d.header))
            .chain(self.syntaxes.iter_mut().map(|s| &mut s.header))
            .chain(self.matching_rules.iter_mut().map(|mr| &mut mr.header))
            .chain(self.attribute_types.iter_mut().map(|at| &mut at.header))
            .chain(self.object_classes.iter_mut().map(|oc| &mut oc.header));

        for header in headers {
            header.schema_name = name.to_string();
        }
    }

    /// All objects, kinds in registration order.
    pub fn into_objects(self) -> Vec<SchemaObject> {
        let mut objects = Vec::with_capacity(self.len());
        objects.extend(self.syntax_checkers.into_iter().map(SchemaObject::SyntaxChecker));
        objects.extend(self.normalizers.into_iter().map(SchemaObject::Normalizer));
        objects.extend(self.comparators.into_iter().map(SchemaObject::Comparator));
        objects.extend(self.syntaxes.into_iter().map(SchemaObject::LdapSyntax));
        objects.extend(self.matching_rules.into_iter().map(SchemaObject::MatchingRule));
        objects.extend(self.attribute_types.into_iter().map(SchemaObject::AttributeType));
        objects.extend(self.object_classes.into_iter().map(SchemaObject::ObjectClass));
        objects
    }
}

impl FromIterator<SchemaObject> for SchemaObjects {
    fn from_iter<I: IntoIterator<Item = SchemaObject>>(iter: I) -> Self {
        let mut objects = Self::new();
        for object in iter {
            objects.push(object);
        }
        objects
    }
}
