//! Validation of schema objects against the current registries.
//!
//! The [`SchemaValidator`] decides whether a submitted [`SchemaObject`] may be
//! registered. It never mutates anything: on success it hands back a
//! [`RegisteredObject`] whose references have been resolved to canonical OIDs
//! (and whose implementation has been instantiated, for normalizers,
//! comparators and syntax checkers). On failure it returns the first
//! [`SchemaViolation`] found, checks running in a fixed order so that the
//! reported violation is deterministic.

mod attribute_type;
mod matching_rule;
mod object_class;


use crate::error::{SchemaViolation, ValidationResult};
use crate::implementations::{ImplementationFactory, Pluggable};
use crate::manager::SchemaManagerConfig;
use crate::model::oid::{is_descr, is_numeric_oid};
use crate::model::{ObjectKind, SchemaObject, SchemaObjectHeader};
use crate::registries::{RegisteredObject, Registries};
use log::debug;

/// Checks schema objects against a snapshot of the registries.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    registries: &'a Registries,
    factory: &'a ImplementationFactory,
    config: &'a SchemaManagerConfig,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(
        registries: &'a Registries,
        factory: &'a ImplementationFactory,
        config: &'a SchemaManagerConfig,
    ) -> Self {
        Self {
            registries,
            factory,
            config,
        }
    }

    /// Validate an object, returning it in registrable form.
    pub fn validate(&self, object: SchemaObject) -> ValidationResult<RegisteredObject> {
        debug!("Validating {} {}", object.kind(), object.oid());
        self.check_identity(object.header())?;

        match object {
            SchemaObject::AttributeType(at) => self
                .validate_attribute_type(at)
                .map(RegisteredObject::AttributeType),
            SchemaObject::ObjectClass(oc) => self
                .validate_object_class(oc)
                .map(RegisteredObject::ObjectClass),
            SchemaObject::MatchingRule(mr) => self
                .validate_matching_rule(mr)
                .map(RegisteredObject::MatchingRule),
            SchemaObject::LdapSyntax(syntax) => self
                .validate_syntax(syntax)
                .map(RegisteredObject::LdapSyntax),
            SchemaObject::Normalizer(description) => {
                let implementation = self
                    .factory
                    .create_normalizer(&description.header.oid, &description.implementation)?;
                Ok(RegisteredObject::Normalizer(Pluggable::new(
                    description,
                    implementation,
                )))
            }
            SchemaObject::Comparator(description) => {
                let implementation = self
                    .factory
                    .create_comparator(&description.header.oid, &description.implementation)?;
                Ok(RegisteredObject::Comparator(Pluggable::new(
                    description,
                    implementation,
                )))
            }
            SchemaObject::SyntaxChecker(description) => {
                let implementation = self
                    .factory
                    .create_syntax_checker(&description.header.oid, &description.implementation)?;
                Ok(RegisteredObject::SyntaxChecker(Pluggable::new(
                    description,
                    implementation,
                )))
            }
        }
    }

    /// OID and name syntax, then global uniqueness.
    fn check_identity(&self, header: &SchemaObjectHeader) -> ValidationResult<()> {
        if self.config.validate_oids && !is_numeric_oid(&header.oid) {
            return Err(SchemaViolation::InvalidOid {
                oid: header.oid.clone(),
            });
        }
        if self.config.check_name_syntax {
            if let Some(name) = header.names.iter().find(|name| !is_descr(name)) {
                return Err(SchemaViolation::InvalidName {
                    oid: header.oid.clone(),
                    name: name.clone(),
                });
            }
        }

        self.registries.global().check_available(header)
    }

    /// Resolve a reference of the given kind to the registered OID.
    fn resolve(&self, kind: ObjectKind, id: &str) -> Option<String> {
        let oid = match kind {
            ObjectKind::AttributeType => self.registries.attribute_types().oid_of(id),
            ObjectKind::ObjectClass => self.registries.object_classes().oid_of(id),
            ObjectKind::MatchingRule => self.registries.matching_rules().oid_of(id),
            ObjectKind::Normalizer => self.registries.normalizers().oid_of(id),
            ObjectKind::Comparator => self.registries.comparators().oid_of(id),
            ObjectKind::SyntaxChecker => self.registries.syntax_checkers().oid_of(id),
            ObjectKind::LdapSyntax => self.registries.ldap_syntaxes().oid_of(id),
        };
        oid.map(str::to_string)
    }
}
