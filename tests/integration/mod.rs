//! Integration tests module.
//!
//! These tests drive whole schemas through the manager: the embedded
//! standard schemas, application schemas layered on top of them, schema
//! documents read from disk and the shared async manager.

pub mod embedded_schemas;
pub mod json_loader;
pub mod lifecycle;
pub mod shared_manager;

// Re-export commonly used test utilities
pub use crate::common::fixtures::{
    application_loader, core_manager, embedded_manager, private_oid, standard_manager, syntaxes,
};
pub use crate::{assert_accepted, assert_rejected, assert_schema_error};
