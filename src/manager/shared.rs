//! Lock-protected schema manager for concurrent use.
//!
//! [`SharedSchemaManager`] wraps a [`SchemaManager`] in a tokio `RwLock`.
//! Lookups and value operations take the read lock and run concurrently;
//! every mutation holds the write lock for its whole duration, so a reader
//! never sees a half-loaded schema.
//!
//! Because the error list of the wrapped manager is overwritten by the next
//! mutation, the mutating methods here return the violations captured under
//! the same lock instead.
//!
//! # Example Usage
//!
//! ```rust
//! use ldap_schema::{SchemaManager, SharedSchemaManager};
//!
//! # async fn example() -> Result<(), ldap_schema::SchemaError> {
//! let shared = SharedSchemaManager::new(SchemaManager::with_embedded_schemas()?);
//! let violations = shared.enable(&["core"]).await?;
//! assert!(violations.is_empty());
//!
//! let reader = shared.clone();
//! let normalized = tokio::spawn(async move { reader.normalize("cn", " Babs  Jensen").await })
//!     .await
//!     .expect("task panicked")?;
//! assert_eq!(normalized, "babs jensen");
//! # Ok(())
//! # }
//! ```

use super::core::SchemaManager;
use crate::error::{SchemaResult, SchemaViolation};
use crate::model::{AttributeType, ObjectClass, SchemaObject};
use log::debug;
use std::cmp::Ordering;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable handle to a schema manager shared between tasks.
#[derive(Debug, Clone)]
pub struct SharedSchemaManager {
    inner: Arc<RwLock<SchemaManager>>,
}

/// Counters describing the state of a shared manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaManagerStats {
    pub loaded_schemas: usize,
    pub enabled_schemas: usize,
    pub registered_objects: usize,
}

impl SharedSchemaManager {
    pub fn new(manager: SchemaManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    /// Read access to the wrapped manager.
    ///
    /// Mutations wait until the guard is dropped.
    pub async fn read(&self) -> RwLockReadGuard<'_, SchemaManager> {
        self.inner.read().await
    }

    /// Exclusive access to the wrapped manager.
    pub async fn write(&self) -> RwLockWriteGuard<'_, SchemaManager> {
        self.inner.write().await
    }

    /// Copy of the wrapped manager at this point in time.
    pub async fn snapshot(&self) -> SchemaManager {
        self.inner.read().await.clone()
    }

    pub async fn stats(&self) -> SchemaManagerStats {
        let guard = self.inner.read().await;
        SchemaManagerStats {
            loaded_schemas: guard.loaded_schemas().len(),
            enabled_schemas: guard.enabled_schemas().len(),
            registered_objects: guard.registries().size(),
        }
    }

    /// Validate and register an object; see [`SchemaManager::add`].
    pub async fn add(&self, object: impl Into<SchemaObject>) -> Result<(), Vec<SchemaViolation>> {
        let mut guard = self.inner.write().await;
        if guard.add(object) {
            Ok(())
        } else {
            Err(guard.errors().to_vec())
        }
    }

    /// Unregister an object; see [`SchemaManager::delete`].
    pub async fn delete(&self, id: &str) -> Result<(), Vec<SchemaViolation>> {
        let mut guard = self.inner.write().await;
        if guard.delete(id) {
            Ok(())
        } else {
            Err(guard.errors().to_vec())
        }
    }

    /// Load schemas; see [`SchemaManager::load`].
    ///
    /// Returns the violations of the objects that were rejected.
    pub async fn load(&self, names: &[&str]) -> SchemaResult<Vec<SchemaViolation>> {
        let mut guard = self.inner.write().await;
        debug!("Shared load of {:?}", names);
        guard.load(names)?;
        Ok(guard.errors().to_vec())
    }

    /// Load a schema and its dependencies; see [`SchemaManager::load_with_deps`].
    pub async fn load_with_deps(&self, name: &str) -> SchemaResult<Vec<SchemaViolation>> {
        self.enable(&[name]).await
    }

    /// Enable schemas and their dependencies; see [`SchemaManager::enable`].
    pub async fn enable(&self, names: &[&str]) -> SchemaResult<Vec<SchemaViolation>> {
        let mut guard = self.inner.write().await;
        debug!("Shared enable of {:?}", names);
        guard.enable(names)?;
        Ok(guard.errors().to_vec())
    }

    /// Disable schemas; see [`SchemaManager::disable`].
    pub async fn disable(&self, names: &[&str]) -> SchemaResult<Vec<SchemaViolation>> {
        let mut guard = self.inner.write().await;
        debug!("Shared disable of {:?}", names);
        guard.disable(names)?;
        Ok(guard.errors().to_vec())
    }

    /// Unload schemas; see [`SchemaManager::unload`].
    pub async fn unload(&self, names: &[&str]) -> SchemaResult<Vec<SchemaViolation>> {
        let mut guard = self.inner.write().await;
        debug!("Shared unload of {:?}", names);
        guard.unload(names)?;
        Ok(guard.errors().to_vec())
    }

    /// Violations recorded by the most recent mutation.
    pub async fn errors(&self) -> Vec<SchemaViolation> {
        self.inner.read().await.errors().to_vec()
    }

    pub async fn is_enabled(&self, name: &str) -> bool {
        self.inner.read().await.is_enabled(name)
    }

    pub async fn lookup_attribute_type(&self, id: &str) -> SchemaResult<AttributeType> {
        self.inner
            .read()
            .await
            .lookup_attribute_type_registry(id)
            .cloned()
    }

    pub async fn lookup_object_class(&self, id: &str) -> SchemaResult<ObjectClass> {
        self.inner
            .read()
            .await
            .lookup_object_class_registry(id)
            .cloned()
    }

    pub async fn normalize(&self, attribute: &str, value: &str) -> SchemaResult<String> {
        self.inner.read().await.normalize(attribute, value)
    }

    pub async fn check_syntax(&self, attribute: &str, value: &str) -> SchemaResult<bool> {
        self.inner.read().await.check_syntax(attribute, value)
    }

    pub async fn compare(&self, attribute: &str, left: &str, right: &str) -> SchemaResult<Ordering> {
        self.inner.read().await.compare(attribute, left, right)
    }
}

impl From<SchemaManager> for SharedSchemaManager {
    fn from(manager: SchemaManager) -> Self {
        Self::new(manager)
    }
}
