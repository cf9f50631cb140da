//! Schema object model.
//!
//! Every schema entity (attribute type, object class, matching rule, syntax and
//! the three kinds of pluggable implementations) embeds a
//! [`SchemaObjectHeader`] carrying its OID, names, description, obsolescence flag,
//! owning schema and extensions. [`SchemaObject`] is the tagged union handed to
//! the [`SchemaManager`](crate::SchemaManager).
//!
//! # Key Types
//!
//! - [`AttributeType`] - attribute definition with superior, matching rules and syntax
//! - [`ObjectClass`] - structural, abstract or auxiliary class with MUST/MAY lists
//! - [`MatchingRule`] - syntax plus normalizer and comparator references
//! - [`LdapSyntax`] - syntax with an optional syntax checker reference
//! - [`ImplementationDescription`] - normalizer, comparator or syntax checker descriptor
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::model::{AttributeType, SchemaObject, UsageEnum};
//!
//! let cn = AttributeType::new("2.5.4.3")
//!     .with_names(["cn", "commonName"])
//!     .with_superior("name");
//! assert_eq!(cn.usage, UsageEnum::UserApplications);
//!
//! let object = SchemaObject::from(cn);
//! assert_eq!(object.header().name(), Some("cn"));
//! ```

pub mod attribute_type;
pub mod implementation;
pub mod matching_rule;
pub mod object;
pub mod object_class;
pub mod oid;
mod render;
pub mod syntax;

pub use attribute_type::{AttributeType, UsageEnum};
pub use implementation::ImplementationDescription;
pub use matching_rule::{MatchingRule, MatchingRuleUsage};
pub use object::{ObjectKind, SchemaObject, SchemaObjectHeader};
pub use object_class::{ObjectClass, ObjectClassKind};
pub use syntax::LdapSyntax;
