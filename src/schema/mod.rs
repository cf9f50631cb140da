//! Schema descriptors, loaders and dependency ordering.
//!
//! A schema is a named group of schema objects with dependencies on other
//! schemas. A [`SchemaLoader`] provides descriptors and objects to the
//! [`SchemaManager`](crate::SchemaManager); two loaders are provided:
//!
//! - [`JsonSchemaLoader`] reads JSON documents, including the standard schemas
//!   embedded in the library
//! - [`InMemorySchemaLoader`] holds schemas built in code
//!
//! # Examples
//!
//! ```rust
//! use ldap_schema::{JsonSchemaLoader, SchemaLoader};
//!
//! # fn main() -> Result<(), ldap_schema::SchemaError> {
//! let loader = JsonSchemaLoader::embedded()?;
//! let cosine = loader.schema("cosine").expect("embedded schema");
//! assert!(cosine.depends_on("core"));
//! # Ok(())
//! # }
//! ```

pub(crate) mod dependencies;
pub mod descriptor;
pub mod embedded;
pub mod json;
pub mod loader;
pub mod memory;

pub use descriptor::Schema;
pub use json::JsonSchemaLoader;
pub use loader::{SchemaLoader, SchemaObjects};
pub use memory::InMemorySchemaLoader;
