//! Lookup tables for registered schema objects.
//!
//! [`Registries`] aggregates one [`SchemaObjectRegistry`] per object kind, the
//! global [`OidRegistry`] enforcing cross-kind uniqueness and a reverse index
//! of references ("used by") that protects objects from being removed while
//! other registered objects still point at them.
//!
//! Objects reach the registries only after the
//! [`SchemaValidator`](crate::validation::SchemaValidator) has accepted them and
//! rewritten every reference to the referenced object's OID, so all lookups
//! below can follow references by OID.

pub mod hierarchy;
pub mod object_registry;
pub mod oid_registry;


pub use hierarchy::OidNormalizer;
pub use object_registry::{RegistryEntry, SchemaObjectRegistry};
pub use oid_registry::OidRegistry;

use crate::error::{SchemaViolation, ValidationResult};
use crate::implementations::{LdapComparator, Normalizer, Pluggable, SyntaxChecker};
use crate::model::{
    AttributeType, LdapSyntax, MatchingRule, ObjectClass, ObjectKind, SchemaObject,
    SchemaObjectHeader,
};
use log::trace;
use std::collections::{BTreeSet, HashMap};

pub type AttributeTypeRegistry = SchemaObjectRegistry<AttributeType>;
pub type ObjectClassRegistry = SchemaObjectRegistry<ObjectClass>;
pub type MatchingRuleRegistry = SchemaObjectRegistry<MatchingRule>;
pub type LdapSyntaxRegistry = SchemaObjectRegistry<LdapSyntax>;
pub type NormalizerRegistry = SchemaObjectRegistry<Pluggable<dyn Normalizer>>;
pub type ComparatorRegistry = SchemaObjectRegistry<Pluggable<dyn LdapComparator>>;
pub type SyntaxCheckerRegistry = SchemaObjectRegistry<Pluggable<dyn SyntaxChecker>>;

/// A validated schema object, ready to be stored.
#[derive(Debug, Clone)]
pub enum RegisteredObject {
    AttributeType(AttributeType),
    ObjectClass(ObjectClass),
    MatchingRule(MatchingRule),
    Normalizer(Pluggable<dyn Normalizer>),
    Comparator(Pluggable<dyn LdapComparator>),
    SyntaxChecker(Pluggable<dyn SyntaxChecker>),
    LdapSyntax(LdapSyntax),
}

impl RegisteredObject {
    pub fn header(&self) -> &SchemaObjectHeader {
        match self {
            RegisteredObject::AttributeType(at) => at.header(),
            RegisteredObject::ObjectClass(oc) => oc.header(),
            RegisteredObject::MatchingRule(mr) => mr.header(),
            RegisteredObject::Normalizer(n) => n.header(),
            RegisteredObject::Comparator(c) => c.header(),
            RegisteredObject::SyntaxChecker(s) => s.header(),
            RegisteredObject::LdapSyntax(s) => s.header(),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            RegisteredObject::AttributeType(_) => ObjectKind::AttributeType,
            RegisteredObject::ObjectClass(_) => ObjectKind::ObjectClass,
            RegisteredObject::MatchingRule(_) => ObjectKind::MatchingRule,
            RegisteredObject::Normalizer(_) => ObjectKind::Normalizer,
            RegisteredObject::Comparator(_) => ObjectKind::Comparator,
            RegisteredObject::SyntaxChecker(_) => ObjectKind::SyntaxChecker,
            RegisteredObject::LdapSyntax(_) => ObjectKind::LdapSyntax,
        }
    }

    pub fn oid(&self) -> &str {
        &self.header().oid
    }

    /// OIDs of the objects this object refers to.
    pub fn references(&self) -> Vec<String> {
        match self {
            RegisteredObject::AttributeType(at) => at.references(),
            RegisteredObject::ObjectClass(oc) => oc.references(),
            RegisteredObject::MatchingRule(mr) => mr.references(),
            RegisteredObject::Normalizer(n) => n.references(),
            RegisteredObject::Comparator(c) => c.references(),
            RegisteredObject::SyntaxChecker(s) => s.references(),
            RegisteredObject::LdapSyntax(s) => s.references(),
        }
    }

    /// Convert back into the submitted form, dropping instantiated implementations.
    pub fn into_schema_object(self) -> SchemaObject {
        match self {
            RegisteredObject::AttributeType(at) => SchemaObject::AttributeType(at),
            RegisteredObject::ObjectClass(oc) => SchemaObject::ObjectClass(oc),
            RegisteredObject::MatchingRule(mr) => SchemaObject::MatchingRule(mr),
            RegisteredObject::Normalizer(n) => SchemaObject::Normalizer(n.description),
            RegisteredObject::Comparator(c) => SchemaObject::Comparator(c.description),
            RegisteredObject::SyntaxChecker(s) => SchemaObject::SyntaxChecker(s.description),
            RegisteredObject::LdapSyntax(s) => SchemaObject::LdapSyntax(s),
        }
    }
}

/// All registries of a schema manager.
///
/// Cloning is used to validate batches against a scratch copy, so every
/// field is cheap to clone: implementations are shared through `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    attribute_types: AttributeTypeRegistry,
    object_classes: ObjectClassRegistry,
    matching_rules: MatchingRuleRegistry,
    normalizers: NormalizerRegistry,
    comparators: ComparatorRegistry,
    syntax_checkers: SyntaxCheckerRegistry,
    syntaxes: LdapSyntaxRegistry,
    global: OidRegistry,
    used_by: HashMap<String, BTreeSet<String>>,
}

impl Registries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute_types(&self) -> &AttributeTypeRegistry {
        &self.attribute_types
    }

    pub fn object_classes(&self) -> &ObjectClassRegistry {
        &self.object_classes
    }

    pub fn matching_rules(&self) -> &MatchingRuleRegistry {
        &self.matching_rules
    }

    pub fn normalizers(&self) -> &NormalizerRegistry {
        &self.normalizers
    }

    pub fn comparators(&self) -> &ComparatorRegistry {
        &self.comparators
    }

    pub fn syntax_checkers(&self) -> &SyntaxCheckerRegistry {
        &self.syntax_checkers
    }

    pub fn ldap_syntaxes(&self) -> &LdapSyntaxRegistry {
        &self.syntaxes
    }

    /// The registry of every OID and name across kinds.
    pub fn global(&self) -> &OidRegistry {
        &self.global
    }

    /// Total number of registered objects.
    pub fn size(&self) -> usize {
        self.global.size()
    }

    /// Number of registered objects of one kind.
    pub fn size_of(&self, kind: ObjectKind) -> usize {
        match kind {
            ObjectKind::AttributeType => self.attribute_types.size(),
            ObjectKind::ObjectClass => self.object_classes.size(),
            ObjectKind::MatchingRule => self.matching_rules.size(),
            ObjectKind::Normalizer => self.normalizers.size(),
            ObjectKind::Comparator => self.comparators.size(),
            ObjectKind::SyntaxChecker => self.syntax_checkers.size(),
            ObjectKind::LdapSyntax => self.syntaxes.size(),
        }
    }

    /// Headers of every registered object, kinds in registration order.
    pub fn headers(&self) -> impl Iterator<Item = &SchemaObjectHeader> {
        self.syntax_checkers
            .iter()
            .map(RegistryEntry::header)
            .chain(self.normalizers.iter().map(RegistryEntry::header))
            .chain(self.comparators.iter().map(RegistryEntry::header))
            .chain(self.syntaxes.iter().map(RegistryEntry::header))
            .chain(self.matching_rules.iter().map(RegistryEntry::header))
            .chain(self.attribute_types.iter().map(RegistryEntry::header))
            .chain(self.object_classes.iter().map(RegistryEntry::header))
    }

    /// Registered object identified by an OID or a name, of any kind.
    pub fn get(&self, id: &str) -> Option<RegisteredObject> {
        let oid = self.global.resolve(id)?;
        let object = match self.global.kind_of(oid)? {
            ObjectKind::AttributeType => {
                RegisteredObject::AttributeType(self.attribute_types.get(oid)?.clone())
            }
            ObjectKind::ObjectClass => {
                RegisteredObject::ObjectClass(self.object_classes.get(oid)?.clone())
            }
            ObjectKind::MatchingRule => {
                RegisteredObject::MatchingRule(self.matching_rules.get(oid)?.clone())
            }
            ObjectKind::Normalizer => RegisteredObject::Normalizer(self.normalizers.get(oid)?.clone()),
            ObjectKind::Comparator => RegisteredObject::Comparator(self.comparators.get(oid)?.clone()),
            ObjectKind::SyntaxChecker => {
                RegisteredObject::SyntaxChecker(self.syntax_checkers.get(oid)?.clone())
            }
            ObjectKind::LdapSyntax => RegisteredObject::LdapSyntax(self.syntaxes.get(oid)?.clone()),
        };
        Some(object)
    }

    /// OIDs of the registered objects referring to `oid`.
    pub fn users_of(&self, oid: &str) -> Vec<&str> {
        self.used_by
            .get(oid)
            .map(|users| users.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn is_used(&self, oid: &str) -> bool {
        self.used_by.get(oid).is_some_and(|users| !users.is_empty())
    }

    /// Store a validated object.
    ///
    /// Fails only on an OID or name collision, in which case nothing changes.
    pub fn register(&mut self, object: RegisteredObject) -> ValidationResult<()> {
        let kind = object.kind();
        let header = object.header().clone();
        let references = object.references();

        self.global.check_available(&header)?;
        match object {
            RegisteredObject::AttributeType(at) => self.attribute_types.register(at)?,
            RegisteredObject::ObjectClass(oc) => self.object_classes.register(oc)?,
            RegisteredObject::MatchingRule(mr) => self.matching_rules.register(mr)?,
            RegisteredObject::Normalizer(n) => self.normalizers.register(n)?,
            RegisteredObject::Comparator(c) => self.comparators.register(c)?,
            RegisteredObject::SyntaxChecker(s) => self.syntax_checkers.register(s)?,
            RegisteredObject::LdapSyntax(s) => self.syntaxes.register(s)?,
        }
        self.global.register(&header, kind)?;

        for reference in references {
            trace!("{} {} references {}", kind, header.oid, reference);
            self.used_by
                .entry(reference)
                .or_default()
                .insert(header.oid.clone());
        }
        Ok(())
    }

    /// Remove an object identified by OID or name.
    ///
    /// Refuses with [`SchemaViolation::InUse`] while other registered objects
    /// still reference it.
    pub fn unregister(&mut self, id: &str) -> ValidationResult<RegisteredObject> {
        let oid = self
            .global
            .resolve(id)
            .map(str::to_string)
            .ok_or_else(|| SchemaViolation::NotFound { oid: id.to_string() })?;

        if self.is_used(&oid) {
            return Err(SchemaViolation::InUse {
                used_by: self.users_of(&oid).into_iter().map(str::to_string).collect(),
                oid,
            });
        }

        self.remove(&oid)
            .ok_or(SchemaViolation::NotFound { oid })
    }

    /// Remove an object without checking its users.
    ///
    /// Used for bulk removals where the caller has verified that every user
    /// is removed as well.
    pub(crate) fn remove(&mut self, oid: &str) -> Option<RegisteredObject> {
        let object = match self.global.kind_of(oid)? {
            ObjectKind::AttributeType => {
                RegisteredObject::AttributeType(self.attribute_types.unregister(oid)?)
            }
            ObjectKind::ObjectClass => {
                RegisteredObject::ObjectClass(self.object_classes.unregister(oid)?)
            }
            ObjectKind::MatchingRule => {
                RegisteredObject::MatchingRule(self.matching_rules.unregister(oid)?)
            }
            ObjectKind::Normalizer => RegisteredObject::Normalizer(self.normalizers.unregister(oid)?),
            ObjectKind::Comparator => RegisteredObject::Comparator(self.comparators.unregister(oid)?),
            ObjectKind::SyntaxChecker => {
                RegisteredObject::SyntaxChecker(self.syntax_checkers.unregister(oid)?)
            }
            ObjectKind::LdapSyntax => RegisteredObject::LdapSyntax(self.syntaxes.unregister(oid)?),
        };
        self.global.unregister(object.header());

        for reference in object.references() {
            if let Some(users) = self.used_by.get_mut(&reference) {
                users.remove(oid);
                if users.is_empty() {
                    self.used_by.remove(&reference);
                }
            }
        }
        self.used_by.remove(oid);

        Some(object)
    }
}
