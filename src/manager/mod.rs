//! Schema manager: the facade over registries, loader and validation.
//!
//! The [`SchemaManager`] owns the registries and the set of loaded schemas.
//! Every mutating operation clears the error list first. Objects failing
//! validation are refused one by one and reported through
//! [`SchemaManager::errors`]. Hard failures are returned as
//! [`SchemaError`](crate::SchemaError).
//!
//! # Module Organization
//!
//! * [`core`] - The manager struct, accessors, lookups and value operations
//! * [`objects`] - Adding and deleting single schema objects
//! * [`loading`] - Loading, unloading and verifying schemas
//! * [`enablement`] - Enabling and disabling schemas with their dependencies
//! * [`builder`] - Configuration and builder
//! * [`shared`] - Async, lock-protected handle for concurrent use

pub mod builder;
pub mod core;
pub mod enablement;
pub mod loading;
pub mod objects;
pub mod shared;


pub use builder::{SchemaManagerBuilder, SchemaManagerConfig};
pub use core::SchemaManager;
pub use shared::SharedSchemaManager;
