//! Per-kind registry keyed by OID and by every (case-insensitive) name.

use crate::error::{SchemaError, SchemaResult, SchemaViolation, ValidationResult};
use crate::implementations::{LdapComparator, Normalizer, Pluggable, SyntaxChecker};
use crate::model::{
    AttributeType, LdapSyntax, MatchingRule, ObjectClass, ObjectKind, SchemaObjectHeader,
};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A value that can be stored in a [`SchemaObjectRegistry`].
pub trait RegistryEntry: Clone + fmt::Debug {
    /// Kind of the objects held by the registry
    const KIND: ObjectKind;

    fn header(&self) -> &SchemaObjectHeader;

    /// OIDs of the schema objects this entry refers to.
    fn references(&self) -> Vec<String>;
}

impl RegistryEntry for AttributeType {
    const KIND: ObjectKind = ObjectKind::AttributeType;

    fn header(&self) -> &SchemaObjectHeader {
        &self.header
    }

    fn references(&self) -> Vec<String> {
        [
            &self.superior,
            &self.equality,
            &self.ordering,
            &self.substring,
            &self.syntax,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}

impl RegistryEntry for ObjectClass {
    const KIND: ObjectKind = ObjectKind::ObjectClass;

    fn header(&self) -> &SchemaObjectHeader {
        &self.header
    }

    fn references(&self) -> Vec<String> {
        let mut references: Vec<String> = self
            .superiors
            .iter()
            .chain(&self.must)
            .chain(&self.may)
            .cloned()
            .collect();
        references.sort();
        references.dedup();
        references
    }
}

impl RegistryEntry for MatchingRule {
    const KIND: ObjectKind = ObjectKind::MatchingRule;

    fn header(&self) -> &SchemaObjectHeader {
        &self.header
    }

    fn references(&self) -> Vec<String> {
        std::iter::once(&self.syntax)
            .chain(self.normalizer.as_ref())
            .chain(self.comparator.as_ref())
            .cloned()
            .collect()
    }
}

impl RegistryEntry for LdapSyntax {
    const KIND: ObjectKind = ObjectKind::LdapSyntax;

    fn header(&self) -> &SchemaObjectHeader {
        &self.header
    }

    fn references(&self) -> Vec<String> {
        self.syntax_checker.iter().cloned().collect()
    }
}

macro_rules! pluggable_entry {
    ($capability:ty, $kind:expr) => {
        impl RegistryEntry for Pluggable<$capability> {
            const KIND: ObjectKind = $kind;

            fn header(&self) -> &SchemaObjectHeader {
                &self.description.header
            }

            fn references(&self) -> Vec<String> {
                Vec::new()
            }
        }
    };
}

pluggable_entry!(dyn Normalizer, ObjectKind::Normalizer);
pluggable_entry!(dyn LdapComparator, ObjectKind::Comparator);
pluggable_entry!(dyn SyntaxChecker, ObjectKind::SyntaxChecker);

/// Lookup table for one kind of schema object.
///
/// Entries are keyed by OID; every name maps to the OID in a lowercase index.
/// The registry enforces uniqueness within its own kind only, cross-kind
/// uniqueness is the job of the [`OidRegistry`](super::OidRegistry).
#[derive(Debug, Clone)]
pub struct SchemaObjectRegistry<T> {
    by_oid: BTreeMap<String, T>,
    by_name: HashMap<String, String>,
}

impl<T> Default for SchemaObjectRegistry<T> {
    fn default() -> Self {
        Self {
            by_oid: BTreeMap::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<T: RegistryEntry> SchemaObjectRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> ObjectKind {
        T::KIND
    }

    /// Number of registered objects.
    pub fn size(&self) -> usize {
        self.by_oid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_oid.is_empty()
    }

    /// Resolve an OID or name to the registered OID.
    pub fn oid_of(&self, id: &str) -> Option<&str> {
        if let Some((oid, _)) = self.by_oid.get_key_value(id) {
            return Some(oid.as_str());
        }
        self.by_name
            .get(&id.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.oid_of(id).is_some()
    }

    /// Find an object by OID or name.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.oid_of(id).and_then(|oid| self.by_oid.get(oid))
    }

    /// Find an object by OID or name, failing when it is not registered.
    pub fn lookup(&self, id: &str) -> SchemaResult<&T> {
        self.get(id)
            .ok_or_else(|| SchemaError::object_not_found(T::KIND, id))
    }

    /// Registered objects in OID order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.by_oid.values()
    }

    pub fn oids(&self) -> impl Iterator<Item = &str> {
        self.by_oid.keys().map(String::as_str)
    }

    pub(crate) fn register(&mut self, entry: T) -> ValidationResult<()> {
        let header = entry.header();
        if self.by_oid.contains_key(&header.oid) {
            return Err(SchemaViolation::AlreadyRegistered {
                oid: header.oid.clone(),
                kind: T::KIND,
            });
        }
        for name in &header.names {
            if let Some(owner) = self.by_name.get(&name.to_ascii_lowercase()) {
                return Err(SchemaViolation::NameAlreadyRegistered {
                    oid: header.oid.clone(),
                    name: name.clone(),
                    owner: owner.clone(),
                });
            }
        }

        for name in &header.names {
            self.by_name
                .insert(name.to_ascii_lowercase(), header.oid.clone());
        }
        self.by_oid.insert(header.oid.clone(), entry);
        Ok(())
    }

    pub(crate) fn unregister(&mut self, oid: &str) -> Option<T> {
        let entry = self.by_oid.remove(oid)?;
        for name in &entry.header().names {
            self.by_name.remove(&name.to_ascii_lowercase());
        }
        Some(entry)
    }
}
