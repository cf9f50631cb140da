//! LDAP schema registry and validation engine.
//!
//! Maintains the registries of an LDAP server's schema (attribute types,
//! object classes, matching rules, syntaxes and their normalizer, comparator
//! and syntax checker implementations), validates every object against
//! RFC 4512 before it is registered and keeps cross-references consistent
//! while schemas are loaded, enabled, disabled and unloaded.
//!
//! # Core Components
//!
//! - [`SchemaManager`] - Facade over registries, loader and validation
//! - [`SchemaLoader`] - Source of schema descriptors and their objects
//! - [`Registries`] - Per-kind lookup tables and the global OID registry
//! - [`ImplementationFactory`] - Resolves implementation identifiers to normalizers,
//!   comparators and syntax checkers
//!
//! # Quick Start
//!
//! ```rust
//! use ldap_schema::SchemaManager;
//! use ldap_schema::model::AttributeType;
//!
//! # fn main() -> Result<(), ldap_schema::SchemaError> {
//! let mut manager = SchemaManager::with_embedded_schemas()?;
//! manager.load_with_deps("inetorgperson")?;
//! manager.load(&["other"])?;
//!
//! let badge = AttributeType::new("1.3.6.1.4.1.32473.2.1")
//!     .with_names(["badgeNumber"])
//!     .with_superior("name");
//! if !manager.add(badge) {
//!     for violation in manager.errors() {
//!         eprintln!("{violation}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod implementations;
pub mod manager;
pub mod model;
pub mod registries;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{SchemaError, SchemaResult, SchemaViolation, ValidationResult, ValueError};
pub use implementations::{ImplementationFactory, LdapComparator, Normalizer, SyntaxChecker};
pub use manager::shared::SchemaManagerStats;
pub use manager::{SchemaManager, SchemaManagerBuilder, SchemaManagerConfig, SharedSchemaManager};
pub use model::{
    AttributeType, ImplementationDescription, LdapSyntax, MatchingRule, MatchingRuleUsage,
    ObjectClass, ObjectClassKind, ObjectKind, SchemaObject, SchemaObjectHeader, UsageEnum,
};
pub use registries::{OidRegistry, Registries};
pub use schema::{InMemorySchemaLoader, JsonSchemaLoader, Schema, SchemaLoader, SchemaObjects};
