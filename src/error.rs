//! Error types for schema management operations.
//!
//! Two families of errors exist. [`SchemaError`] covers hard failures such as
//! unknown schemas, broken dependency graphs, lookups of objects that do not
//! exist and loader I/O. [`SchemaViolation`] describes why a single schema
//! object was refused by the validation engine; violations are collected by the
//! [`SchemaManager`](crate::SchemaManager) instead of being returned as errors.

use crate::model::{MatchingRuleUsage, ObjectClassKind, ObjectKind};

/// Main error type for schema manager operations.
///
/// These represent configuration or programming errors (a missing dependency,
/// a dependency cycle, a lookup of an OID that was never registered) rather
/// than data-quality problems in individual schema objects.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The loader does not know a schema with this name
    #[error("Schema not found: {name}")]
    SchemaNotFound { name: String },

    /// The operation requires the schema to be loaded first
    #[error("Schema '{name}' is not loaded")]
    SchemaNotLoaded { name: String },

    /// A schema depends on another schema that is neither loaded nor part of the batch
    #[error("Schema '{schema}' depends on '{dependency}', which is not loaded")]
    MissingDependency { schema: String, dependency: String },

    /// The dependency graph between schemas contains a cycle
    #[error("Cyclic schema dependency: {}", path.join(" -> "))]
    DependencyCycle { path: Vec<String> },

    /// Another schema still depends on the schema being disabled or unloaded
    #[error("Schema '{schema}' is still required by '{dependent}'")]
    SchemaInUse { schema: String, dependent: String },

    /// Lookup of a schema object that is not registered
    #[error("No {kind} registered under '{id}'")]
    ObjectNotFound { kind: ObjectKind, id: String },

    /// Attribute value rejected by a normalizer or syntax checker
    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    /// Invalid manager configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// I/O failure while a loader was reading schema documents
    #[error("Schema loader I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed schema document
    #[error("Schema document error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a schema object is refused by the registries.
///
/// Every variant carries the OID of the rejected object so callers can
/// correlate the entries of [`SchemaManager::errors`](crate::SchemaManager::errors)
/// with the objects they submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    /// The OID is not a dotted-decimal numeric OID
    #[error("'{oid}' is not a valid numeric OID")]
    InvalidOid { oid: String },

    /// A name is not a valid RFC 4512 descriptor
    #[error("Object {oid} has an invalid name '{name}'")]
    InvalidName { oid: String, name: String },

    /// The OID is already used by a schema object of any kind
    #[error("OID {oid} is already registered for a {kind}")]
    AlreadyRegistered { oid: String, kind: ObjectKind },

    /// A name is already used by another schema object of any kind
    #[error("Name '{name}' of {oid} is already registered for {owner}")]
    NameAlreadyRegistered {
        oid: String,
        name: String,
        owner: String,
    },

    /// The owning schema of the object is not loaded
    #[error("Object {oid} belongs to schema '{schema}', which is not loaded")]
    SchemaNotLoaded { oid: String, schema: String },

    /// The owning schema of the object is loaded but disabled
    #[error("Object {oid} belongs to schema '{schema}', which is disabled")]
    SchemaDisabled { oid: String, schema: String },

    /// The superior of an attribute type or object class cannot be resolved
    #[error("Superior '{superior}' of {oid} does not exist")]
    NonExistentSuperior { oid: String, superior: String },

    /// The superior chain of an attribute type loops back onto itself
    #[error("Superior chain of attribute type {oid} is cyclic")]
    SuperiorCycle { oid: String },

    /// The superior graph of an object class loops or lists a superior twice
    #[error("Object class {oid} has a cyclic or duplicated superior '{superior}'")]
    SupCycle { oid: String, superior: String },

    /// The usage of an attribute type differs from its superior's usage
    #[error("Attribute type {oid} must have the same usage as its superior {superior}")]
    InvalidSuperiorUsage { oid: String, superior: String },

    /// A subtype of a collective attribute is not collective
    #[error("Attribute type {oid} must be collective like its superior {superior}")]
    NonCollectiveSubtype { oid: String, superior: String },

    /// Object class superior kinds that may not be combined
    #[error("{kind} object class {oid} cannot inherit from {superior_kind} object class {superior}")]
    IncompatibleSuperiorType {
        oid: String,
        kind: ObjectClassKind,
        superior: String,
        superior_kind: ObjectClassKind,
    },

    /// An attribute type has neither a syntax nor a superior providing one
    #[error("Attribute type {oid} has no syntax and no superior")]
    NoSyntax { oid: String },

    /// A syntax reference cannot be resolved
    #[error("Syntax '{syntax}' referenced by {oid} does not exist")]
    UnresolvableSyntax { oid: String, syntax: String },

    /// A matching rule reference cannot be resolved
    #[error("{usage} matching rule '{rule}' referenced by {oid} does not exist")]
    UnresolvableMatchingRule {
        oid: String,
        usage: MatchingRuleUsage,
        rule: String,
    },

    /// A normalizer reference cannot be resolved
    #[error("Normalizer '{normalizer}' referenced by {oid} does not exist")]
    UnresolvableNormalizer { oid: String, normalizer: String },

    /// A comparator reference cannot be resolved
    #[error("Comparator '{comparator}' referenced by {oid} does not exist")]
    UnresolvableComparator { oid: String, comparator: String },

    /// A syntax checker reference cannot be resolved
    #[error("Syntax checker '{checker}' referenced by {oid} does not exist")]
    UnresolvableSyntaxChecker { oid: String, checker: String },

    /// An attribute in MUST or MAY cannot be resolved
    #[error("Attribute '{attribute}' referenced by {oid} does not exist")]
    UnresolvableAttribute { oid: String, attribute: String },

    /// An attribute appears twice in MUST/MAY, or in a MAY while an ancestor requires it
    #[error("Attribute '{attribute}' is declared more than once by {oid}")]
    DuplicateAttribute { oid: String, attribute: String },

    /// Collective attributes cannot be listed by object classes
    #[error("Collective attribute '{attribute}' cannot be listed by object class {oid}")]
    CollectiveAttributeInMustOrMay { oid: String, attribute: String },

    /// Collective attributes must have userApplications usage
    #[error("Collective attribute type {oid} must have userApplications usage")]
    CollectiveNotUserApplications { oid: String },

    /// Collective attributes cannot be single-valued
    #[error("Collective attribute type {oid} cannot be single-valued")]
    CollectiveSingleValued { oid: String },

    /// NO-USER-MODIFICATION requires an operational usage
    #[error("Attribute type {oid} is not user-modifiable but has userApplications usage")]
    NoUserModificationWithUserApplications { oid: String },

    /// No factory is registered under the implementation identifier
    #[error("Implementation '{implementation}' of {oid} cannot be loaded")]
    UnloadableImplementation { oid: String, implementation: String },

    /// The implementation identifier names a factory of another capability
    #[error("Implementation '{implementation}' of {oid} is not a {expected}")]
    IncompatibleImplementation {
        oid: String,
        implementation: String,
        expected: ObjectKind,
    },

    /// Removal of an object that is not registered
    #[error("No schema object registered under '{oid}'")]
    NotFound { oid: String },

    /// Removal of an object still referenced by other registered objects
    #[error("{oid} is still referenced by {}", used_by.join(", "))]
    InUse { oid: String, used_by: Vec<String> },
}

/// Errors raised while normalizing or checking attribute values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The value does not conform to the expected syntax
    #[error("'{value}' is not a valid {syntax} value")]
    InvalidSyntax { syntax: String, value: String },
}

impl SchemaError {
    /// Create a schema not found error
    pub fn schema_not_found(name: impl Into<String>) -> Self {
        Self::SchemaNotFound { name: name.into() }
    }

    /// Create a schema not loaded error
    pub fn schema_not_loaded(name: impl Into<String>) -> Self {
        Self::SchemaNotLoaded { name: name.into() }
    }

    /// Create an object lookup error
    pub fn object_not_found(kind: ObjectKind, id: impl Into<String>) -> Self {
        Self::ObjectNotFound {
            kind,
            id: id.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

impl SchemaViolation {
    /// OID of the schema object the violation is about.
    pub fn oid(&self) -> &str {
        match self {
            Self::InvalidOid { oid }
            | Self::InvalidName { oid, .. }
            | Self::AlreadyRegistered { oid, .. }
            | Self::NameAlreadyRegistered { oid, .. }
            | Self::SchemaNotLoaded { oid, .. }
            | Self::SchemaDisabled { oid, .. }
            | Self::NonExistentSuperior { oid, .. }
            | Self::SuperiorCycle { oid }
            | Self::SupCycle { oid, .. }
            | Self::InvalidSuperiorUsage { oid, .. }
            | Self::NonCollectiveSubtype { oid, .. }
            | Self::IncompatibleSuperiorType { oid, .. }
            | Self::NoSyntax { oid }
            | Self::UnresolvableSyntax { oid, .. }
            | Self::UnresolvableMatchingRule { oid, .. }
            | Self::UnresolvableNormalizer { oid, .. }
            | Self::UnresolvableComparator { oid, .. }
            | Self::UnresolvableSyntaxChecker { oid, .. }
            | Self::UnresolvableAttribute { oid, .. }
            | Self::DuplicateAttribute { oid, .. }
            | Self::CollectiveAttributeInMustOrMay { oid, .. }
            | Self::CollectiveNotUserApplications { oid }
            | Self::CollectiveSingleValued { oid }
            | Self::NoUserModificationWithUserApplications { oid }
            | Self::UnloadableImplementation { oid, .. }
            | Self::IncompatibleImplementation { oid, .. }
            | Self::NotFound { oid }
            | Self::InUse { oid, .. } => oid,
        }
    }
}

impl ValueError {
    /// Create an invalid syntax error
    pub fn invalid_syntax(syntax: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            syntax: syntax.into(),
            value: value.into(),
        }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ValidationResult<T> = Result<T, SchemaViolation>;
pub type ValueResult<T> = Result<T, ValueError>;
